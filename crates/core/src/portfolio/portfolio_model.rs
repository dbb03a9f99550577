//! Portfolio aggregation domain models.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use stockfolio_market_data::{NewsItem, TechnicalEntry};

/// One holding from the ledger merged with whatever market data is available.
///
/// Market data fields stay `None`/empty when the provider has nothing for the
/// stock; the ledger fields are always present.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StockSnapshot {
    pub id: String,
    pub name: String,
    pub sector: String,
    pub stock_code: String,
    pub stock_exchange: Option<String>,
    pub purchase_price: Decimal,
    pub quantity: i32,
    /// Latest price on the holding's exchange (NSE when unset)
    pub current_price: Option<Decimal>,
    pub pe_ratio: Option<Decimal>,
    pub recent_news: Vec<NewsItem>,
    pub stock_technical_data: Vec<TechnicalEntry>,
    /// Rendered summary of the first technical row, if any
    pub latest_earnings: Option<String>,
    /// current_price x quantity; zero while the price is unknown
    pub present_value: Decimal,
}

/// Holdings grouped by their ledger sector
pub type SectorHoldings = HashMap<String, Vec<StockSnapshot>>;

/// Ledger-only totals for the whole portfolio
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    pub total_investment: Decimal,
    pub total_quantity: i64,
    pub sector_wise: HashMap<String, SectorTotals>,
}

/// Per-sector slice of the summary
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SectorTotals {
    pub investment: Decimal,
    pub quantity: i64,
}

/// Key metrics for a single stock
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StockMetrics {
    pub name: String,
    pub pe_ratio: Option<Decimal>,
    pub current_price: Option<Decimal>,
    pub latest_earnings: Option<String>,
    pub present_value: Decimal,
}
