//! Market data provider trait definitions.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::{SearchResult, StockDetails};

/// Trait for providers that serve per-stock detail payloads.
///
/// Implement this trait to add support for a new stock data source.
#[async_trait]
pub trait StockDataProvider: Send + Sync {
    /// Unique identifier for this provider.
    ///
    /// Should be a constant string like "INDIAN_STOCK_API". Used for logging
    /// and error reporting.
    fn id(&self) -> &'static str;

    /// Fetch the details payload for a stock by its listed name.
    ///
    /// # Returns
    ///
    /// Whatever the provider reports about the stock; missing parts of the
    /// payload come back as `None`/empty rather than an error.
    async fn get_stock_details(&self, name: &str) -> Result<StockDetails, MarketDataError>;
}

/// Trait for providers that can search the symbol universe.
#[async_trait]
pub trait SymbolSearchProvider: Send + Sync {
    /// Unique identifier for this provider.
    fn id(&self) -> &'static str;

    /// Search for symbols matching the query.
    ///
    /// # Returns
    ///
    /// Matching results ordered by provider relevance, or
    /// [`MarketDataError::SymbolNotFound`] when nothing matches.
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, MarketDataError>;
}
