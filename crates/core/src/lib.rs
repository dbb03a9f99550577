//! Stockfolio Core - Domain entities, services, and traits.
//!
//! This crate contains the core business logic for the portfolio tracker.
//! It is database-agnostic and defines traits that are implemented
//! by the `storage-sqlite` crate.

pub mod cache;
pub mod chat;
pub mod constants;
pub mod errors;
pub mod health;
pub mod portfolio;
pub mod purchases;

// Re-export common types from the purchase and portfolio modules
pub use portfolio::*;
pub use purchases::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
