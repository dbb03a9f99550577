//! Process-local caching for ledger reads and market data lookups.

mod portfolio_cache;

pub use portfolio_cache::{PortfolioCache, PortfolioCacheStats};
