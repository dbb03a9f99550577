//! Stock purchase service - input validation, persistence and cache coherence.
//!
//! Writes go through the repository and then drop the cached purchase list so
//! the next read repopulates it from storage.

use std::sync::Arc;

use async_trait::async_trait;
use log::debug;
use rust_decimal::Decimal;

use crate::cache::PortfolioCache;
use crate::constants::MAX_MONEY_SCALE;
use crate::errors::{Result, ValidationError};
use crate::purchases::purchases_model::{NewStockPurchase, StockPurchase, StockPurchaseUpdate};
use crate::purchases::purchases_traits::{StockPurchaseRepositoryTrait, StockPurchaseServiceTrait};

/// Exchanges a purchase may be listed on
const SUPPORTED_EXCHANGES: [&str; 2] = ["NSE", "BSE"];

pub struct StockPurchaseService {
    repository: Arc<dyn StockPurchaseRepositoryTrait>,
    cache: Arc<PortfolioCache>,
}

impl StockPurchaseService {
    pub fn new(
        repository: Arc<dyn StockPurchaseRepositoryTrait>,
        cache: Arc<PortfolioCache>,
    ) -> Self {
        Self { repository, cache }
    }
}

fn normalize_name(name: &str) -> Result<String> {
    let name = name.trim();
    let len = name.chars().count();
    if !(2..=100).contains(&len) {
        return Err(ValidationError::InvalidInput(
            "Stock name must be between 2 and 100 characters".to_string(),
        )
        .into());
    }
    Ok(name.to_string())
}

fn normalize_sector(sector: &str) -> Result<String> {
    let sector = sector.trim();
    let len = sector.chars().count();
    if !(2..=50).contains(&len) {
        return Err(ValidationError::InvalidInput(
            "Sector must be between 2 and 50 characters".to_string(),
        )
        .into());
    }
    Ok(sector.to_string())
}

fn normalize_stock_code(code: &str) -> Result<String> {
    let code = code.trim().to_uppercase();
    let len = code.chars().count();
    if !(1..=20).contains(&len) {
        return Err(ValidationError::InvalidInput(
            "Stock code must be between 1 and 20 characters".to_string(),
        )
        .into());
    }
    if !code
        .chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || matches!(c, '.' | '&' | '-'))
    {
        return Err(ValidationError::InvalidInput(
            "Stock code may only contain letters, digits, '.', '&' or '-'".to_string(),
        )
        .into());
    }
    Ok(code)
}

fn normalize_exchange(exchange: Option<String>) -> Result<Option<String>> {
    match exchange {
        None => Ok(None),
        Some(raw) => {
            let exchange = raw.trim().to_uppercase();
            if !SUPPORTED_EXCHANGES.contains(&exchange.as_str()) {
                return Err(ValidationError::InvalidInput(format!(
                    "Stock exchange must be one of {}",
                    SUPPORTED_EXCHANGES.join(", ")
                ))
                .into());
            }
            Ok(Some(exchange))
        }
    }
}

fn validate_price(price: Decimal) -> Result<Decimal> {
    if price < Decimal::ZERO {
        return Err(ValidationError::InvalidInput(
            "Purchase price cannot be negative".to_string(),
        )
        .into());
    }
    if price.normalize().scale() > MAX_MONEY_SCALE {
        return Err(ValidationError::InvalidInput(format!(
            "Purchase price supports at most {} decimal places",
            MAX_MONEY_SCALE
        ))
        .into());
    }
    Ok(price)
}

fn validate_quantity(quantity: i32) -> Result<i32> {
    if quantity < 1 {
        return Err(
            ValidationError::InvalidInput("Quantity must be at least 1".to_string()).into(),
        );
    }
    Ok(quantity)
}

fn validate_new_purchase(new_purchase: NewStockPurchase) -> Result<NewStockPurchase> {
    Ok(NewStockPurchase {
        id: new_purchase.id,
        name: normalize_name(&new_purchase.name)?,
        sector: normalize_sector(&new_purchase.sector)?,
        stock_code: normalize_stock_code(&new_purchase.stock_code)?,
        stock_exchange: normalize_exchange(new_purchase.stock_exchange)?,
        purchase_price: validate_price(new_purchase.purchase_price)?,
        quantity: validate_quantity(new_purchase.quantity)?,
    })
}

fn apply_update(existing: StockPurchase, update: StockPurchaseUpdate) -> Result<StockPurchase> {
    let mut purchase = existing;
    if let Some(name) = update.name {
        purchase.name = normalize_name(&name)?;
    }
    if let Some(sector) = update.sector {
        purchase.sector = normalize_sector(&sector)?;
    }
    if let Some(code) = update.stock_code {
        purchase.stock_code = normalize_stock_code(&code)?;
    }
    if let Some(exchange) = update.stock_exchange {
        purchase.stock_exchange = normalize_exchange(Some(exchange))?;
    }
    if let Some(price) = update.purchase_price {
        purchase.purchase_price = validate_price(price)?;
    }
    if let Some(quantity) = update.quantity {
        purchase.quantity = validate_quantity(quantity)?;
    }
    Ok(purchase)
}

#[async_trait]
impl StockPurchaseServiceTrait for StockPurchaseService {
    async fn get_purchases(&self) -> Result<Vec<StockPurchase>> {
        if let Some(purchases) = self.cache.get_purchases().await {
            debug!("Serving {} stock purchases from cache", purchases.len());
            return Ok(purchases);
        }
        let purchases = self.repository.load_purchases()?;
        self.cache.set_purchases(purchases.clone()).await;
        Ok(purchases)
    }

    async fn create_purchase(&self, new_purchase: NewStockPurchase) -> Result<StockPurchase> {
        let new_purchase = validate_new_purchase(new_purchase)?;
        let created = self.repository.insert_new_purchase(new_purchase).await?;
        self.cache.invalidate_purchases().await;
        Ok(created)
    }

    async fn update_purchase(
        &self,
        purchase_id: &str,
        update: StockPurchaseUpdate,
    ) -> Result<StockPurchase> {
        let existing = self.repository.find_purchase(purchase_id)?;
        let merged = apply_update(existing, update)?;
        let updated = self.repository.update_purchase(merged).await?;
        self.cache.invalidate_purchases().await;
        Ok(updated)
    }

    async fn delete_purchase(&self, purchase_id: &str) -> Result<StockPurchase> {
        let deleted = self
            .repository
            .delete_purchase(purchase_id.to_string())
            .await?;
        self.cache.invalidate_purchases().await;
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use chrono::Utc;
    use rust_decimal_macros::dec;
    use std::sync::RwLock;
    use uuid::Uuid;

    struct MockStockPurchaseRepository {
        purchases: RwLock<Vec<StockPurchase>>,
    }

    impl MockStockPurchaseRepository {
        fn new() -> Self {
            Self {
                purchases: RwLock::new(Vec::new()),
            }
        }

        fn with_purchases(purchases: Vec<StockPurchase>) -> Self {
            Self {
                purchases: RwLock::new(purchases),
            }
        }
    }

    #[async_trait]
    impl StockPurchaseRepositoryTrait for MockStockPurchaseRepository {
        fn load_purchases(&self) -> Result<Vec<StockPurchase>> {
            Ok(self.purchases.read().unwrap().clone())
        }

        fn find_purchase(&self, purchase_id: &str) -> Result<StockPurchase> {
            self.purchases
                .read()
                .unwrap()
                .iter()
                .find(|p| p.id == purchase_id)
                .cloned()
                .ok_or_else(|| Error::NotFound("Stock purchase not found".to_string()))
        }

        async fn insert_new_purchase(
            &self,
            new_purchase: NewStockPurchase,
        ) -> Result<StockPurchase> {
            let now = Utc::now();
            let purchase = StockPurchase {
                id: new_purchase
                    .id
                    .unwrap_or_else(|| Uuid::new_v4().to_string()),
                name: new_purchase.name,
                sector: new_purchase.sector,
                stock_code: new_purchase.stock_code,
                stock_exchange: new_purchase.stock_exchange,
                purchase_price: new_purchase.purchase_price,
                quantity: new_purchase.quantity,
                created_at: now,
                updated_at: now,
            };
            self.purchases.write().unwrap().push(purchase.clone());
            Ok(purchase)
        }

        async fn update_purchase(&self, purchase_update: StockPurchase) -> Result<StockPurchase> {
            let mut purchases = self.purchases.write().unwrap();
            let slot = purchases
                .iter_mut()
                .find(|p| p.id == purchase_update.id)
                .ok_or_else(|| Error::NotFound("Stock purchase not found".to_string()))?;
            *slot = purchase_update.clone();
            Ok(purchase_update)
        }

        async fn delete_purchase(&self, purchase_id: String) -> Result<StockPurchase> {
            let mut purchases = self.purchases.write().unwrap();
            let index = purchases
                .iter()
                .position(|p| p.id == purchase_id)
                .ok_or_else(|| Error::NotFound("Stock purchase not found".to_string()))?;
            Ok(purchases.remove(index))
        }

        fn ping(&self) -> Result<()> {
            Ok(())
        }
    }

    fn sample_purchase(id: &str, name: &str) -> StockPurchase {
        let now = Utc::now();
        StockPurchase {
            id: id.to_string(),
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

    fn sample_new(name: &str) -> NewStockPurchase {
        NewStockPurchase {
            id: None,
            name: name.to_string(),
            sector: "Energy".to_string(),
            stock_code: "RELIANCE".to_string(),
            stock_exchange: Some("NSE".to_string()),
            purchase_price: dec!(2500.50),
            quantity: 10,
        }
    }

    fn make_service(repository: MockStockPurchaseRepository) -> StockPurchaseService {
        StockPurchaseService::new(Arc::new(repository), Arc::new(PortfolioCache::new()))
    }

    #[tokio::test]
    async fn test_create_purchase_normalizes_input() {
        let service = make_service(MockStockPurchaseRepository::new());
        let mut input = sample_new("  Reliance Industries  ");
        input.stock_code = " reliance ".to_string();
        input.stock_exchange = Some("nse".to_string());

        let created = service.create_purchase(input).await.unwrap();

        assert_eq!(created.name, "Reliance Industries");
        assert_eq!(created.stock_code, "RELIANCE");
        assert_eq!(created.stock_exchange.as_deref(), Some("NSE"));
    }

    #[tokio::test]
    async fn test_create_purchase_rejects_short_name() {
        let service = make_service(MockStockPurchaseRepository::new());
        let input = sample_new("R");

        let result = service.create_purchase(input).await;

        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[tokio::test]
    async fn test_create_purchase_rejects_negative_price() {
        let service = make_service(MockStockPurchaseRepository::new());
        let mut input = sample_new("Reliance Industries");
        input.purchase_price = dec!(-10);

        let result = service.create_purchase(input).await;

        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[tokio::test]
    async fn test_create_purchase_rejects_price_with_too_many_decimals() {
        let service = make_service(MockStockPurchaseRepository::new());
        let mut input = sample_new("Reliance Industries");
        input.purchase_price = dec!(10.123);

        let result = service.create_purchase(input).await;

        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[tokio::test]
    async fn test_create_purchase_accepts_trailing_zero_scale() {
        let service = make_service(MockStockPurchaseRepository::new());
        let mut input = sample_new("Reliance Industries");
        input.purchase_price = dec!(10.100);

        let created = service.create_purchase(input).await.unwrap();

        assert_eq!(created.purchase_price, dec!(10.10));
    }

    #[tokio::test]
    async fn test_create_purchase_rejects_zero_quantity() {
        let service = make_service(MockStockPurchaseRepository::new());
        let mut input = sample_new("Reliance Industries");
        input.quantity = 0;

        let result = service.create_purchase(input).await;

        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[tokio::test]
    async fn test_create_purchase_rejects_unknown_exchange() {
        let service = make_service(MockStockPurchaseRepository::new());
        let mut input = sample_new("Reliance Industries");
        input.stock_exchange = Some("NYSE".to_string());

        let result = service.create_purchase(input).await;

        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[tokio::test]
    async fn test_create_purchase_allows_missing_exchange() {
        let service = make_service(MockStockPurchaseRepository::new());
        let mut input = sample_new("Reliance Industries");
        input.stock_exchange = None;

        let created = service.create_purchase(input).await.unwrap();

        assert_eq!(created.stock_exchange, None);
    }

    #[tokio::test]
    async fn test_create_purchase_rejects_invalid_stock_code_characters() {
        let service = make_service(MockStockPurchaseRepository::new());
        let mut input = sample_new("Reliance Industries");
        input.stock_code = "REL IANCE".to_string();

        let result = service.create_purchase(input).await;

        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[tokio::test]
    async fn test_get_purchases_serves_cached_list() {
        let repository = Arc::new(MockStockPurchaseRepository::with_purchases(vec![
            sample_purchase("p1", "Reliance Industries"),
        ]));
        let cache = Arc::new(PortfolioCache::new());
        let service = StockPurchaseService::new(repository.clone(), cache);

        let first = service.get_purchases().await.unwrap();
        assert_eq!(first.len(), 1);

        // Mutate storage behind the service's back; the cached list must win.
        repository.purchases.write().unwrap().clear();
        let second = service.get_purchases().await.unwrap();
        assert_eq!(second.len(), 1);
    }

    #[tokio::test]
    async fn test_create_purchase_invalidates_cached_list() {
        let repository = Arc::new(MockStockPurchaseRepository::new());
        let cache = Arc::new(PortfolioCache::new());
        let service = StockPurchaseService::new(repository, cache);

        assert!(service.get_purchases().await.unwrap().is_empty());

        service
            .create_purchase(sample_new("Reliance Industries"))
            .await
            .unwrap();

        let after = service.get_purchases().await.unwrap();
        assert_eq!(after.len(), 1);
    }

    #[tokio::test]
    async fn test_update_purchase_merges_partial_fields() {
        let service = make_service(MockStockPurchaseRepository::with_purchases(vec![
            sample_purchase("p1", "Reliance Industries"),
        ]));

        let update = StockPurchaseUpdate {
            quantity: Some(25),
            ..Default::default()
        };
        let updated = service.update_purchase("p1", update).await.unwrap();

        assert_eq!(updated.quantity, 25);
        assert_eq!(updated.name, "Reliance Industries");
        assert_eq!(updated.purchase_price, dec!(2500.50));
    }

    #[tokio::test]
    async fn test_update_purchase_validates_merged_fields() {
        let service = make_service(MockStockPurchaseRepository::with_purchases(vec![
            sample_purchase("p1", "Reliance Industries"),
        ]));

        let update = StockPurchaseUpdate {
            purchase_price: Some(dec!(-5)),
            ..Default::default()
        };
        let result = service.update_purchase("p1", update).await;

        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[tokio::test]
    async fn test_update_purchase_unknown_id() {
        let service = make_service(MockStockPurchaseRepository::new());

        let result = service
            .update_purchase("missing", StockPurchaseUpdate::default())
            .await;

        assert!(matches!(result, Err(Error::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_purchase_returns_deleted_record_and_invalidates_cache() {
        let repository = Arc::new(MockStockPurchaseRepository::with_purchases(vec![
            sample_purchase("p1", "Reliance Industries"),
        ]));
        let cache = Arc::new(PortfolioCache::new());
        let service = StockPurchaseService::new(repository, cache);

        assert_eq!(service.get_purchases().await.unwrap().len(), 1);

        let deleted = service.delete_purchase("p1").await.unwrap();
        assert_eq!(deleted.id, "p1");

        assert!(service.get_purchases().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_purchase_unknown_id() {
        let service = make_service(MockStockPurchaseRepository::new());

        let result = service.delete_purchase("missing").await;

        assert!(matches!(result, Err(Error::NotFound(_))));
    }
}
