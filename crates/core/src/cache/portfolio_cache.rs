//! In-memory portfolio cache with TTL using moka.
//!
//! Two stores share the process: the full purchase list under a single
//! well-known key, and per-stock market data keyed by stock name. TTLs mirror
//! how often each payload is expected to change.

use moka::future::Cache;
use std::time::Duration;

use stockfolio_market_data::StockDetails;

use crate::constants::{ONE_DAY, PURCHASES_CACHE_KEY, SEVEN_DAYS, STOCK_CACHE_PREFIX};
use crate::purchases::StockPurchase;

/// In-memory cache for the purchase ledger and per-stock market data
pub struct PortfolioCache {
    /// Full purchase list (7 day TTL, invalidated on every write)
    purchases: Cache<String, Vec<StockPurchase>>,
    /// Per-stock market data payloads (1 day TTL)
    stock_details: Cache<String, StockDetails>,
}

impl PortfolioCache {
    /// Create a new cache with default settings
    pub fn new() -> Self {
        Self {
            purchases: Cache::builder()
                .time_to_live(Duration::from_secs(SEVEN_DAYS))
                .max_capacity(16)
                .build(),
            stock_details: Cache::builder()
                .time_to_live(Duration::from_secs(ONE_DAY))
                .max_capacity(1000)
                .build(),
        }
    }

    /// Get the cached purchase list
    pub async fn get_purchases(&self) -> Option<Vec<StockPurchase>> {
        self.purchases.get(PURCHASES_CACHE_KEY).await
    }

    /// Store the purchase list
    pub async fn set_purchases(&self, purchases: Vec<StockPurchase>) {
        self.purchases
            .insert(PURCHASES_CACHE_KEY.to_string(), purchases)
            .await;
    }

    /// Drop the cached purchase list
    pub async fn invalidate_purchases(&self) {
        self.purchases.invalidate(PURCHASES_CACHE_KEY).await;
    }

    /// Get cached market data for a stock
    pub async fn get_stock_details(&self, name: &str) -> Option<StockDetails> {
        self.stock_details.get(&stock_key(name)).await
    }

    /// Store market data for a stock
    pub async fn set_stock_details(&self, name: &str, details: StockDetails) {
        self.stock_details.insert(stock_key(name), details).await;
    }

    /// Drop cached market data for a stock
    pub async fn invalidate_stock_details(&self, name: &str) {
        self.stock_details.invalidate(&stock_key(name)).await;
    }

    /// Clear both stores
    pub fn clear_all(&self) {
        self.purchases.invalidate_all();
        self.stock_details.invalidate_all();
    }

    /// Get cache statistics
    pub fn stats(&self) -> PortfolioCacheStats {
        PortfolioCacheStats {
            purchase_entries: self.purchases.entry_count() as usize,
            stock_entries: self.stock_details.entry_count() as usize,
        }
    }
}

impl Default for PortfolioCache {
    fn default() -> Self {
        Self::new()
    }
}

fn stock_key(name: &str) -> String {
    format!("{}{}", STOCK_CACHE_PREFIX, name)
}

/// Portfolio cache statistics
#[derive(Debug, Clone)]
pub struct PortfolioCacheStats {
    pub purchase_entries: usize,
    pub stock_entries: usize,
}

impl PortfolioCacheStats {
    pub fn total(&self) -> usize {
        self.purchase_entries + self.stock_entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rust_decimal_macros::dec;

    fn create_test_purchase(name: &str) -> StockPurchase {
        let now = Utc::now();
        StockPurchase {
            id: "p1".to_string(),
            name: name.to_string(),
            sector: "Energy".to_string(),
            stock_code: "RELIANCE".to_string(),
            stock_exchange: Some("NSE".to_string()),
            purchase_price: dec!(2500.50),
            quantity: 10,
            created_at: now,
            updated_at: now,
        }
    }

    fn create_test_details() -> StockDetails {
        StockDetails {
            industry: Some("Oil & Gas".to_string()),
            percent_change: Some(dec!(1.25)),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_purchases_set_get() {
        let cache = PortfolioCache::new();

        cache
            .set_purchases(vec![create_test_purchase("Reliance Industries")])
            .await;

        let retrieved = cache.get_purchases().await;
        assert!(retrieved.is_some());
        assert_eq!(retrieved.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_purchases_miss_before_set() {
        let cache = PortfolioCache::new();

        assert!(cache.get_purchases().await.is_none());
    }

    #[tokio::test]
    async fn test_purchases_invalidate() {
        let cache = PortfolioCache::new();

        cache
            .set_purchases(vec![create_test_purchase("Reliance Industries")])
            .await;
        cache.invalidate_purchases().await;

        assert!(cache.get_purchases().await.is_none());
    }

    #[tokio::test]
    async fn test_stock_details_set_get() {
        let cache = PortfolioCache::new();

        cache
            .set_stock_details("Reliance Industries", create_test_details())
            .await;

        let retrieved = cache.get_stock_details("Reliance Industries").await;
        assert!(retrieved.is_some());
        assert_eq!(
            retrieved.unwrap().industry.as_deref(),
            Some("Oil & Gas")
        );
    }

    #[tokio::test]
    async fn test_stock_details_keyed_by_name() {
        let cache = PortfolioCache::new();

        cache
            .set_stock_details("Reliance Industries", create_test_details())
            .await;

        assert!(cache.get_stock_details("Tata Motors").await.is_none());
    }

    #[tokio::test]
    async fn test_stock_details_invalidate() {
        let cache = PortfolioCache::new();

        cache
            .set_stock_details("Reliance Industries", create_test_details())
            .await;
        cache.invalidate_stock_details("Reliance Industries").await;

        assert!(cache.get_stock_details("Reliance Industries").await.is_none());
    }
}
