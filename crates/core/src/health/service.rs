//! Health service implementation.
//!
//! Builds the health report: process uptime, environment, version and
//! connectivity of the database and the in-process cache. Probes never fail
//! the endpoint; an unreachable dependency is reported as `Disconnected`.

use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::Utc;
use log::warn;

use crate::cache::PortfolioCache;
use crate::health::model::{HealthStatus, ServiceState, ServiceStates};
use crate::health::traits::HealthServiceTrait;
use crate::purchases::StockPurchaseRepositoryTrait;

/// Service for reporting backend health.
pub struct HealthService {
    started_at: Instant,
    environment: String,
    repository: Arc<dyn StockPurchaseRepositoryTrait>,
    cache: Arc<PortfolioCache>,
}

impl HealthService {
    pub fn new(
        repository: Arc<dyn StockPurchaseRepositoryTrait>,
        cache: Arc<PortfolioCache>,
        environment: String,
    ) -> Self {
        Self {
            started_at: Instant::now(),
            environment,
            repository,
            cache,
        }
    }
}

/// Format an uptime duration as "{h}h {m}m {s}s".
fn format_uptime(elapsed: Duration) -> String {
    let total = elapsed.as_secs();
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;
    format!("{}h {}m {}s", hours, minutes, seconds)
}

impl HealthServiceTrait for HealthService {
    fn status(&self) -> HealthStatus {
        let database = match self.repository.ping() {
            Ok(()) => ServiceState::Connected,
            Err(e) => {
                warn!("Database health probe failed: {}", e);
                ServiceState::Disconnected
            }
        };

        // The cache lives in-process; being able to read its stats is the probe.
        let stats = self.cache.stats();
        let _ = stats.total();
        let cache = ServiceState::Connected;

        HealthStatus {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
            uptime: format_uptime(self.started_at.elapsed()),
            environment: self.environment.clone(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            services: ServiceStates { database, cache },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{DatabaseError, Result};
    use crate::purchases::{NewStockPurchase, StockPurchase};
    use async_trait::async_trait;

    struct MockPingRepository {
        healthy: bool,
    }

    #[async_trait]
    impl StockPurchaseRepositoryTrait for MockPingRepository {
        fn load_purchases(&self) -> Result<Vec<StockPurchase>> {
            unimplemented!("not needed for health tests")
        }

        fn find_purchase(&self, _purchase_id: &str) -> Result<StockPurchase> {
            unimplemented!("not needed for health tests")
        }

        async fn insert_new_purchase(
            &self,
            _new_purchase: NewStockPurchase,
        ) -> Result<StockPurchase> {
            unimplemented!("not needed for health tests")
        }

        async fn update_purchase(&self, _purchase_update: StockPurchase) -> Result<StockPurchase> {
            unimplemented!("not needed for health tests")
        }

        async fn delete_purchase(&self, _purchase_id: String) -> Result<StockPurchase> {
            unimplemented!("not needed for health tests")
        }

        fn ping(&self) -> Result<()> {
            if self.healthy {
                Ok(())
            } else {
                Err(DatabaseError::ConnectionFailed("connection refused".to_string()).into())
            }
        }
    }

    fn make_service(healthy: bool) -> HealthService {
        HealthService::new(
            Arc::new(MockPingRepository { healthy }),
            Arc::new(PortfolioCache::new()),
            "test".to_string(),
        )
    }

    #[test]
    fn test_format_uptime() {
        assert_eq!(format_uptime(Duration::from_secs(0)), "0h 0m 0s");
        assert_eq!(format_uptime(Duration::from_secs(59)), "0h 0m 59s");
        assert_eq!(format_uptime(Duration::from_secs(3600)), "1h 0m 0s");
        assert_eq!(format_uptime(Duration::from_secs(3725)), "1h 2m 5s");
        assert_eq!(format_uptime(Duration::from_secs(90_061)), "25h 1m 1s");
    }

    #[test]
    fn test_status_reports_connected_database() {
        let report = make_service(true).status();

        assert_eq!(report.status, "healthy");
        assert_eq!(report.environment, "test");
        assert_eq!(report.services.database, ServiceState::Connected);
        assert_eq!(report.services.cache, ServiceState::Connected);
    }

    #[test]
    fn test_status_reports_disconnected_database_without_failing() {
        let report = make_service(false).status();

        assert_eq!(report.status, "healthy");
        assert_eq!(report.services.database, ServiceState::Disconnected);
    }

    #[test]
    fn test_status_serializes_camel_case() {
        let report = make_service(true).status();
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["services"]["database"], "Connected");
        assert!(json["uptime"].as_str().unwrap().ends_with('s'));
        assert!(json.get("environment").is_some());
    }
}
