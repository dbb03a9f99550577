use std::sync::Arc;

use crate::main_lib::AppState;
use axum::{extract::State, routing::get, Json, Router};
use stockfolio_core::health::HealthStatus;

async fn healthz() -> &'static str {
    "ok"
}

async fn readyz() -> &'static str {
    "ok"
}

/// Full health report: uptime, version and dependency connectivity.
async fn get_health(State(state): State<Arc<AppState>>) -> Json<HealthStatus> {
    Json(state.health_service.status())
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(get_health))
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
}
