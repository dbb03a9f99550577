//! Market data models
//!
//! This module contains the core data types for market data operations:
//! - `details` - Per-stock provider payloads (StockDetails, NewsItem, TechnicalEntry)
//! - `search` - Search result data (SearchResult)

mod details;
mod search;

pub use details::{NewsItem, StockDetails, TechnicalEntry};
pub use search::SearchResult;
