//! Error types for market data operations.

use thiserror::Error;

/// Errors returned by market data providers.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The provider has no data for the requested symbol or query.
    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),

    /// The provider rejected the request due to rate limiting.
    #[error("Rate limited by provider: {provider}")]
    RateLimited { provider: String },

    /// The request to the provider timed out.
    #[error("Request to provider {provider} timed out")]
    Timeout { provider: String },

    /// The provider returned an error response or an unusable payload.
    #[error("Provider {provider} error: {message}")]
    ProviderError { provider: String, message: String },

    /// A network-level failure occurred before a response was received.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
