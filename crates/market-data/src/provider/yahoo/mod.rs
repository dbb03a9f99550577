//! Yahoo Finance symbol search provider.
//!
//! This provider uses the public Yahoo Finance search endpoint to resolve
//! free-text queries (company names, partial tickers) into candidate symbols.
//! No API key is required.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::errors::MarketDataError;
use crate::models::SearchResult;
use crate::provider::SymbolSearchProvider;

const BASE_URL: &str = "https://query1.finance.yahoo.com/v1/finance";
const PROVIDER_ID: &str = "YAHOO_SEARCH";

// ============================================================================
// API Response Structures
// ============================================================================

/// Response from /search endpoint
#[derive(Debug, Deserialize)]
struct SearchResponse {
    /// Matching instruments
    #[serde(default)]
    quotes: Vec<QuoteItem>,
    // Note: news and count fields exist but not used
}

/// Individual search hit
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct QuoteItem {
    /// Ticker symbol
    symbol: Option<String>,
    /// Short display name
    shortname: Option<String>,
    /// Full legal name
    longname: Option<String>,
    /// Exchange code (e.g., "NSI")
    exchange: Option<String>,
    /// Human-readable exchange name (e.g., "NSE")
    exch_disp: Option<String>,
    /// Instrument type (e.g., "EQUITY")
    quote_type: Option<String>,
    /// Human-readable instrument type
    type_disp: Option<String>,
    /// Relevance score
    score: Option<f64>,
}

impl QuoteItem {
    /// Convert a search hit into a `SearchResult`, skipping symbol-less rows.
    fn into_search_result(self) -> Option<SearchResult> {
        let symbol = self.symbol?;
        let name = self
            .longname
            .or(self.shortname)
            .unwrap_or_else(|| symbol.clone());
        let exchange = self.exch_disp.or(self.exchange).unwrap_or_default();
        let asset_type = self.quote_type.or(self.type_disp).unwrap_or_default();

        let result = SearchResult::new(symbol, name, exchange, asset_type);
        Some(match self.score {
            Some(score) => result.with_score(score),
            None => result,
        })
    }
}

// ============================================================================
// YahooSearchProvider
// ============================================================================

/// Yahoo Finance symbol search provider.
pub struct YahooSearchProvider {
    client: Client,
}

impl YahooSearchProvider {
    /// Create a new search provider.
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client }
    }
}

impl Default for YahooSearchProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SymbolSearchProvider for YahooSearchProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, MarketDataError> {
        let url = format!("{}/search", BASE_URL);

        debug!("Yahoo search request for {:?}", query);

        let response = self
            .client
            .get(&url)
            .query(&[("q", query)])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    MarketDataError::Timeout {
                        provider: PROVIDER_ID.to_string(),
                    }
                } else {
                    MarketDataError::ProviderError {
                        provider: PROVIDER_ID.to_string(),
                        message: format!("Request failed: {}", e),
                    }
                }
            })?;

        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(MarketDataError::RateLimited {
                provider: PROVIDER_ID.to_string(),
            });
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("HTTP {} - {}", status, body),
            });
        }

        let text = response
            .text()
            .await
            .map_err(|e| MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("Failed to read response: {}", e),
            })?;

        let search: SearchResponse =
            serde_json::from_str(&text).map_err(|e| MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("Failed to parse search response: {}", e),
            })?;

        let results: Vec<SearchResult> = search
            .quotes
            .into_iter()
            .filter_map(QuoteItem::into_search_result)
            .collect();

        if results.is_empty() {
            return Err(MarketDataError::SymbolNotFound(query.to_string()));
        }

        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_search_response() {
        let json = r#"{
            "count": 2,
            "quotes": [
                {
                    "exchange": "NSI",
                    "shortname": "RELIANCE INDS",
                    "quoteType": "EQUITY",
                    "symbol": "RELIANCE.NS",
                    "index": "quotes",
                    "score": 205790.0,
                    "typeDisp": "Equity",
                    "longname": "Reliance Industries Limited",
                    "exchDisp": "NSE"
                },
                {
                    "exchange": "BSE",
                    "shortname": "RELIANCE INDS",
                    "quoteType": "EQUITY",
                    "symbol": "RELIANCE.BO",
                    "index": "quotes",
                    "typeDisp": "Equity",
                    "exchDisp": "Bombay"
                }
            ],
            "news": []
        }"#;

        let response: SearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.quotes.len(), 2);

        let results: Vec<SearchResult> = response
            .quotes
            .into_iter()
            .filter_map(QuoteItem::into_search_result)
            .collect();

        assert_eq!(results[0].symbol, "RELIANCE.NS");
        assert_eq!(results[0].name, "Reliance Industries Limited");
        assert_eq!(results[0].exchange, "NSE");
        assert_eq!(results[0].asset_type, "EQUITY");
        assert_eq!(results[0].score, Some(205790.0));
        assert_eq!(results[1].symbol, "RELIANCE.BO");
        assert_eq!(results[1].score, None);
    }

    #[test]
    fn test_parse_empty_search_response() {
        let response: SearchResponse =
            serde_json::from_str(r#"{ "count": 0, "quotes": [], "news": [] }"#).unwrap();
        assert!(response.quotes.is_empty());
    }

    #[test]
    fn test_search_hit_without_symbol_is_skipped() {
        let item = QuoteItem {
            symbol: None,
            shortname: Some("Mystery".to_string()),
            longname: None,
            exchange: None,
            exch_disp: None,
            quote_type: None,
            type_disp: None,
            score: None,
        };

        assert!(item.into_search_result().is_none());
    }

    #[test]
    fn test_search_hit_falls_back_to_symbol_as_name() {
        let item = QuoteItem {
            symbol: Some("TATAMOTORS.NS".to_string()),
            shortname: None,
            longname: None,
            exchange: Some("NSI".to_string()),
            exch_disp: None,
            quote_type: Some("EQUITY".to_string()),
            type_disp: None,
            score: None,
        };

        let result = item.into_search_result().unwrap();
        assert_eq!(result.name, "TATAMOTORS.NS");
        assert_eq!(result.exchange, "NSI");
    }
}
