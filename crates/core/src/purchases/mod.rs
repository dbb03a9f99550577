//! Stock purchases module - domain models, services, and traits.

mod purchases_model;
mod purchases_service;
mod purchases_traits;

pub use purchases_model::{NewStockPurchase, StockPurchase, StockPurchaseUpdate};
pub use purchases_service::StockPurchaseService;
pub use purchases_traits::{StockPurchaseRepositoryTrait, StockPurchaseServiceTrait};
