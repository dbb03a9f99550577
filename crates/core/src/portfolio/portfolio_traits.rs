use crate::errors::Result;
use crate::portfolio::portfolio_model::{PortfolioSummary, SectorHoldings, StockMetrics};
use async_trait::async_trait;

/// Trait for portfolio aggregation operations
#[async_trait]
pub trait PortfolioServiceTrait: Send + Sync {
    /// Merge every holding with market data and group the results by sector.
    async fn get_sector_holdings(&self) -> Result<SectorHoldings>;

    /// Ledger-only investment and quantity totals. No external calls.
    fn get_portfolio_summary(&self) -> Result<PortfolioSummary>;

    /// Key metrics for one stock, held or not.
    async fn get_stock_metrics(&self, stock_name: &str) -> Result<StockMetrics>;
}
