//! Per-stock detail payloads returned by data providers.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Market data for a single stock, as reported by an external provider.
///
/// Every field is optional. Providers routinely omit parts of the payload
/// (no BSE listing, no news coverage, missing technicals) and consumers are
/// expected to merge whatever is present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockDetails {
    /// Industry classification reported by the provider
    pub industry: Option<String>,
    /// Day-over-day percent change
    pub percent_change: Option<Decimal>,
    /// Latest traded price on the BSE
    pub price_bse: Option<Decimal>,
    /// Latest traded price on the NSE
    pub price_nse: Option<Decimal>,
    /// Ticker under which the stock trades on the BSE
    pub exchange_code_bse: Option<String>,
    /// Ticker under which the stock trades on the NSE
    pub exchange_code_nse: Option<String>,
    /// Recent news coverage
    pub recent_news: Vec<NewsItem>,
    /// Technical indicator rows, most significant first
    pub technical_data: Vec<TechnicalEntry>,
}

/// A single news item attached to a stock.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    pub headline: Option<String>,
    pub date: Option<String>,
    pub url: Option<String>,
    pub intro: Option<String>,
}

/// One technical indicator row (moving-average style period prices).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnicalEntry {
    /// Period length in days
    pub days: Option<i64>,
    /// Average price over the period on the BSE
    pub bse_price: Option<String>,
    /// Average price over the period on the NSE
    pub nse_price: Option<String>,
}
