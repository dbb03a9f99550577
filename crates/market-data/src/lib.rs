//! Market data crate for the stock portfolio tracker.
//!
//! This crate provides access to the external data sources the portfolio
//! backend relies on:
//!
//! - Per-stock details (prices, company profile, news, technicals) from the
//!   Indian stock market API
//! - Symbol search backed by Yahoo Finance
//!
//! # Core Types
//!
//! - [`StockDetails`] - Everything a provider reports about one stock. All
//!   fields are optional; consumers merge whatever is present.
//! - [`SearchResult`] - One hit from a symbol search.
//!
//! Providers sit behind the [`StockDataProvider`] and [`SymbolSearchProvider`]
//! traits so services can be tested against in-memory fakes.

pub mod errors;
pub mod models;
pub mod provider;

// Re-export all public types from models
pub use models::{NewsItem, SearchResult, StockDetails, TechnicalEntry};

// Re-export error type
pub use errors::MarketDataError;

// Re-export provider types
pub use provider::indian_api::IndianStockApiProvider;
pub use provider::yahoo::YahooSearchProvider;
pub use provider::{StockDataProvider, SymbolSearchProvider};
