//! Database models for stock purchases.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use stockfolio_core::purchases::{NewStockPurchase, StockPurchase};

/// Database model for stock purchases.
///
/// Prices and timestamps are stored as TEXT to keep SQLite round-trips
/// lossless; conversions to `Decimal` and `DateTime<Utc>` happen at the
/// model boundary.
#[derive(
    Queryable,
    Identifiable,
    AsChangeset,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::stock_purchases)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct StockPurchaseDB {
    pub id: String,
    pub name: String,
    pub sector: String,
    pub stock_code: String,
    pub stock_exchange: Option<String>,
    pub purchase_price: String,
    pub quantity: i32,
    pub is_deleted: bool,
    pub created_at: String,
    pub updated_at: String,
}

/// Database model for recording a new stock purchase
#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::stock_purchases)]
#[serde(rename_all = "camelCase")]
pub struct NewStockPurchaseDB {
    pub id: Option<String>,
    pub name: String,
    pub sector: String,
    pub stock_code: String,
    pub stock_exchange: Option<String>,
    pub purchase_price: String,
    pub quantity: i32,
    pub is_deleted: bool,
    pub created_at: String,
    pub updated_at: String,
}

// Conversion to domain models

impl From<StockPurchaseDB> for StockPurchase {
    fn from(db: StockPurchaseDB) -> Self {
        let parse_datetime = |s: &str| -> DateTime<Utc> {
            DateTime::parse_from_rfc3339(s)
                .map(|dt| dt.with_timezone(&Utc))
                .unwrap_or_else(|_| Utc::now())
        };

        StockPurchase {
            id: db.id,
            name: db.name,
            sector: db.sector,
            stock_code: db.stock_code,
            stock_exchange: db.stock_exchange,
            purchase_price: Decimal::from_str(&db.purchase_price).unwrap_or_default(),
            quantity: db.quantity,
            created_at: parse_datetime(&db.created_at),
            updated_at: parse_datetime(&db.updated_at),
        }
    }
}

impl From<&StockPurchase> for StockPurchaseDB {
    fn from(purchase: &StockPurchase) -> Self {
        StockPurchaseDB {
            id: purchase.id.clone(),
            name: purchase.name.clone(),
            sector: purchase.sector.clone(),
            stock_code: purchase.stock_code.clone(),
            stock_exchange: purchase.stock_exchange.clone(),
            purchase_price: purchase.purchase_price.to_string(),
            quantity: purchase.quantity,
            is_deleted: false,
            created_at: purchase.created_at.to_rfc3339(),
            updated_at: purchase.updated_at.to_rfc3339(),
        }
    }
}

impl From<NewStockPurchase> for NewStockPurchaseDB {
    fn from(domain: NewStockPurchase) -> Self {
        let now = Utc::now().to_rfc3339();
        Self {
            id: domain.id,
            name: domain.name,
            sector: domain.sector,
            stock_code: domain.stock_code,
            stock_exchange: domain.stock_exchange,
            purchase_price: domain.purchase_price.to_string(),
            quantity: domain.quantity,
            is_deleted: false,
            created_at: now.clone(),
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample_db() -> StockPurchaseDB {
        StockPurchaseDB {
            id: "p-1".to_string(),
            name: "Reliance Industries".to_string(),
            sector: "Energy".to_string(),
            stock_code: "RELIANCE".to_string(),
            stock_exchange: Some("NSE".to_string()),
            purchase_price: "2500.50".to_string(),
            quantity: 10,
            is_deleted: false,
            created_at: "2024-03-01T10:15:00+00:00".to_string(),
            updated_at: "2024-03-02T08:00:00+00:00".to_string(),
        }
    }

    #[test]
    fn test_db_to_domain_parses_price_and_dates() {
        let domain = StockPurchase::from(sample_db());
        assert_eq!(domain.purchase_price, dec!(2500.50));
        assert_eq!(domain.created_at.to_rfc3339(), "2024-03-01T10:15:00+00:00");
        assert_eq!(domain.quantity, 10);
    }

    #[test]
    fn test_db_to_domain_tolerates_garbage_price() {
        let mut db = sample_db();
        db.purchase_price = "not-a-number".to_string();
        let domain = StockPurchase::from(db);
        assert_eq!(domain.purchase_price, Decimal::ZERO);
    }

    #[test]
    fn test_domain_to_db_keeps_decimal_text() {
        let domain = StockPurchase::from(sample_db());
        let db = StockPurchaseDB::from(&domain);
        assert_eq!(db.purchase_price, "2500.50");
        assert!(!db.is_deleted);
    }

    #[test]
    fn test_new_purchase_conversion_stamps_timestamps() {
        let new_purchase = NewStockPurchase {
            id: None,
            name: "Infosys".to_string(),
            sector: "IT".to_string(),
            stock_code: "INFY".to_string(),
            stock_exchange: None,
            purchase_price: dec!(1450.00),
            quantity: 5,
        };
        let db = NewStockPurchaseDB::from(new_purchase);
        assert!(db.id.is_none());
        assert_eq!(db.created_at, db.updated_at);
        assert!(!db.is_deleted);
    }
}
