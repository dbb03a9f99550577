use crate::errors::Result;
use crate::purchases::purchases_model::{NewStockPurchase, StockPurchase, StockPurchaseUpdate};
use async_trait::async_trait;

/// Trait for stock purchase repository operations
#[async_trait]
pub trait StockPurchaseRepositoryTrait: Send + Sync {
    fn load_purchases(&self) -> Result<Vec<StockPurchase>>;
    fn find_purchase(&self, purchase_id: &str) -> Result<StockPurchase>;
    async fn insert_new_purchase(&self, new_purchase: NewStockPurchase) -> Result<StockPurchase>;
    async fn update_purchase(&self, purchase_update: StockPurchase) -> Result<StockPurchase>;
    async fn delete_purchase(&self, purchase_id: String) -> Result<StockPurchase>;
    /// Cheap connectivity probe used by the health endpoint.
    fn ping(&self) -> Result<()>;
}

/// Trait for stock purchase service operations
#[async_trait]
pub trait StockPurchaseServiceTrait: Send + Sync {
    async fn get_purchases(&self) -> Result<Vec<StockPurchase>>;
    async fn create_purchase(&self, new_purchase: NewStockPurchase) -> Result<StockPurchase>;
    async fn update_purchase(
        &self,
        purchase_id: &str,
        update: StockPurchaseUpdate,
    ) -> Result<StockPurchase>;
    async fn delete_purchase(&self, purchase_id: &str) -> Result<StockPurchase>;
}
