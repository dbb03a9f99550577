use crate::health::model::HealthStatus;

/// Trait for health reporting.
pub trait HealthServiceTrait: Send + Sync {
    /// Build the current health report. Probe failures show up as
    /// `Disconnected` entries, never as an error.
    fn status(&self) -> HealthStatus;
}
