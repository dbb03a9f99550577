//! Market data provider abstractions and implementations.
//!
//! This module contains:
//! - The `StockDataProvider` and `SymbolSearchProvider` traits
//! - Concrete provider implementations (Indian stock API, Yahoo search)
//!
//! Providers own their HTTP clients and translate provider-specific payloads
//! and failure modes into the crate's models and `MarketDataError`.

mod traits;

// Provider implementations
pub mod indian_api;
pub mod yahoo;

// Re-exports
pub use traits::{StockDataProvider, SymbolSearchProvider};
