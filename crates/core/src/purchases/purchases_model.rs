//! Stock purchase domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Domain model representing a recorded stock purchase
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StockPurchase {
    pub id: String,
    pub name: String,
    pub sector: String,
    pub stock_code: String,
    pub stock_exchange: Option<String>,
    pub purchase_price: Decimal,
    pub quantity: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input model for recording a new purchase
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewStockPurchase {
    pub id: Option<String>,
    pub name: String,
    pub sector: String,
    pub stock_code: String,
    #[serde(default)]
    pub stock_exchange: Option<String>,
    pub purchase_price: Decimal,
    pub quantity: i32,
}

/// Partial update for an existing purchase; fields left out stay unchanged
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct StockPurchaseUpdate {
    pub name: Option<String>,
    pub sector: Option<String>,
    pub stock_code: Option<String>,
    pub stock_exchange: Option<String>,
    pub purchase_price: Option<Decimal>,
    pub quantity: Option<i32>,
}
