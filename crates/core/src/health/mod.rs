//! Health module - service status reporting.
//!
//! Backs the health endpoint with a report of process uptime, build version
//! and the connectivity of the database and in-process cache.

mod model;
mod service;
mod traits;

pub use model::{HealthStatus, ServiceState, ServiceStates};
pub use service::HealthService;
pub use traits::HealthServiceTrait;
