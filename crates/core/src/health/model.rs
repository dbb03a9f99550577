//! Health report domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Connectivity state of a backing service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServiceState {
    Connected,
    Disconnected,
}

/// Per-dependency connectivity states.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceStates {
    pub database: ServiceState,
    pub cache: ServiceState,
}

/// Snapshot of the running service reported by the health endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthStatus {
    /// Always "healthy" while the process can answer at all
    pub status: String,
    pub timestamp: DateTime<Utc>,
    /// Process uptime formatted as "{h}h {m}m {s}s"
    pub uptime: String,
    pub environment: String,
    pub version: String,
    pub services: ServiceStates,
}
