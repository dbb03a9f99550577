//! SQLite storage implementation for stock purchases.

mod model;
mod repository;

pub use model::{NewStockPurchaseDB, StockPurchaseDB};
pub use repository::StockPurchaseRepository;
