//! Portfolio module - sector grouping, summary totals and per-stock metrics.

mod portfolio_model;
mod portfolio_service;
mod portfolio_traits;

pub use portfolio_model::{
    PortfolioSummary, SectorHoldings, SectorTotals, StockMetrics, StockSnapshot,
};
pub use portfolio_service::PortfolioService;
pub use portfolio_traits::PortfolioServiceTrait;
