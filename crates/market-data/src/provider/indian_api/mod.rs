//! Indian stock market data provider implementation.
//!
//! This module provides per-stock details from the Indian stock API:
//! - Current BSE/NSE prices, percent change and industry via /stock
//! - Company exchange codes, recent news and technical rows from the same payload
//!
//! The API is keyed (X-Api-Key header) and answers 404 for names it cannot
//! resolve. Numeric fields arrive as JSON numbers or formatted strings
//! depending on the stock, so every value is parsed tolerantly.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::errors::MarketDataError;
use crate::models::{NewsItem, StockDetails, TechnicalEntry};
use crate::provider::StockDataProvider;

const BASE_URL: &str = "https://stock.indianapi.in";
const PROVIDER_ID: &str = "INDIAN_STOCK_API";

// ============================================================================
// API Response Structures
// ============================================================================

/// Response from /stock endpoint
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StockResponse {
    /// Industry classification
    industry: Option<String>,
    /// Day-over-day percent change (number or formatted string)
    #[serde(default)]
    percent_change: Option<Value>,
    /// Latest traded prices per exchange
    #[serde(default)]
    current_price: Option<CurrentPriceResponse>,
    /// Company profile block carrying the exchange listing codes
    #[serde(default)]
    company_profile: Option<CompanyProfileResponse>,
    /// Recent news coverage
    #[serde(default)]
    recent_news: Option<Vec<NewsItemResponse>>,
    /// Technical indicator rows
    #[serde(default)]
    stock_technical_data: Option<Vec<TechnicalEntryResponse>>,
    // Note: companyName, yearHigh, yearLow and financials exist but not used
}

/// Per-exchange price pair
#[derive(Debug, Deserialize)]
struct CurrentPriceResponse {
    /// Price on the Bombay Stock Exchange
    #[serde(rename = "BSE", default)]
    bse: Option<Value>,
    /// Price on the National Stock Exchange
    #[serde(rename = "NSE", default)]
    nse: Option<Value>,
}

/// Subset of the company profile block
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CompanyProfileResponse {
    /// Ticker on the BSE
    exchange_code_bse: Option<String>,
    /// Ticker on the NSE
    exchange_code_nse: Option<String>,
    // Note: mgIndustry, officers and peer data exist but not used
}

/// Individual news item
#[derive(Debug, Deserialize)]
struct NewsItemResponse {
    headline: Option<String>,
    date: Option<String>,
    url: Option<String>,
    intro: Option<String>,
}

/// Individual technical indicator row
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TechnicalEntryResponse {
    /// Period length in days (number or string)
    #[serde(default)]
    days: Option<Value>,
    /// Period price on the BSE
    #[serde(default)]
    bse_price: Option<Value>,
    /// Period price on the NSE
    #[serde(default)]
    nse_price: Option<Value>,
}

/// Error response from the API
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: Option<String>,
}

// ============================================================================
// Conversions
// ============================================================================

/// Parse a value that may arrive as a JSON number or a formatted price string.
fn parse_decimal(value: &Value) -> Option<Decimal> {
    match value {
        Value::Number(n) => n.to_string().parse::<Decimal>().ok(),
        Value::String(s) => s.replace(',', "").trim().parse::<Decimal>().ok(),
        _ => None,
    }
}

/// Parse a value that may arrive as a JSON integer or a numeric string.
fn parse_days(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

/// Render a number-or-string value for display.
fn value_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

impl From<StockResponse> for StockDetails {
    fn from(response: StockResponse) -> Self {
        let (price_bse, price_nse) = match &response.current_price {
            Some(prices) => (
                prices.bse.as_ref().and_then(parse_decimal),
                prices.nse.as_ref().and_then(parse_decimal),
            ),
            None => (None, None),
        };

        let (exchange_code_bse, exchange_code_nse) = match response.company_profile {
            Some(profile) => (profile.exchange_code_bse, profile.exchange_code_nse),
            None => (None, None),
        };

        StockDetails {
            industry: response.industry,
            percent_change: response.percent_change.as_ref().and_then(parse_decimal),
            price_bse,
            price_nse,
            exchange_code_bse,
            exchange_code_nse,
            recent_news: response
                .recent_news
                .unwrap_or_default()
                .into_iter()
                .map(|item| NewsItem {
                    headline: item.headline,
                    date: item.date,
                    url: item.url,
                    intro: item.intro,
                })
                .collect(),
            technical_data: response
                .stock_technical_data
                .unwrap_or_default()
                .into_iter()
                .map(|entry| TechnicalEntry {
                    days: entry.days.as_ref().and_then(parse_days),
                    bse_price: entry.bse_price.as_ref().and_then(value_to_string),
                    nse_price: entry.nse_price.as_ref().and_then(value_to_string),
                })
                .collect(),
        }
    }
}

// ============================================================================
// IndianStockApiProvider
// ============================================================================

/// Indian stock market data provider.
///
/// Serves NSE/BSE listed stocks looked up by company name.
pub struct IndianStockApiProvider {
    client: Client,
    api_key: String,
}

impl IndianStockApiProvider {
    /// Create a new provider with the given API key.
    pub fn new(api_key: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client, api_key }
    }

    /// Make a GET request to the /stock endpoint for one stock name.
    async fn fetch_stock(&self, name: &str) -> Result<String, MarketDataError> {
        let url = format!("{}/stock?name={}", BASE_URL, urlencoding::encode(name));

        debug!("Indian stock API request for {}", name);

        let response = self
            .client
            .get(&url)
            .header("X-Api-Key", &self.api_key)
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

        // Handle rate limiting
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(MarketDataError::RateLimited {
                provider: PROVIDER_ID.to_string(),
            });
        }

        // Handle unauthorized (invalid API key)
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: "Invalid or missing API key".to_string(),
            });
        }

        // Handle forbidden (API key quota exceeded)
        if status == reqwest::StatusCode::FORBIDDEN {
            return Err(MarketDataError::RateLimited {
                provider: PROVIDER_ID.to_string(),
            });
        }

        // The API answers 404 for names it cannot resolve
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(MarketDataError::SymbolNotFound(name.to_string()));
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();

            // Try to parse error message
            if let Ok(error_resp) = serde_json::from_str::<ErrorResponse>(&body) {
                if let Some(error_msg) = error_resp.error {
                    return Err(MarketDataError::ProviderError {
                        provider: PROVIDER_ID.to_string(),
                        message: error_msg,
                    });
                }
            }

            return Err(MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("HTTP {} - {}", status, body),
            });
        }

        response
            .text()
            .await
            .map_err(|e| MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("Failed to read response: {}", e),
            })
    }
}

#[async_trait]
impl StockDataProvider for IndianStockApiProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn get_stock_details(&self, name: &str) -> Result<StockDetails, MarketDataError> {
        let text = self.fetch_stock(name).await?;

        let response: StockResponse =
            serde_json::from_str(&text).map_err(|e| MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("Failed to parse stock response: {}", e),
            })?;

        Ok(response.into())
    }
}
