//! Admin endpoints: /health, /stats

use crate::state::AppState;
use axum::extract::State;
use axum::Json;
use serde::Serialize;
use std::sync::Arc;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// Health check endpoint
///
/// GET /health
///
/// Returns a simple health check response to verify the server is running.
pub async fn health() -> Json<HealthResponse> {
    tracing::debug!("health check requested");
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Server statistics response
#[derive(Serialize)]
pub struct StatsResponse {
    /// Server uptime in seconds
    pub uptime_secs: u64,
    /// Number of registered entities
    pub entity_count: usize,
    /// Server version
    pub version: &'static str,
}

/// Server statistics endpoint
///
/// GET /stats
///
/// Returns server statistics including uptime and entity count.
pub async fn stats(State(state): State<Arc<AppState>>) -> Json<StatsResponse> {
    tracing::debug!("server stats requested");

    Json(StatsResponse {
        uptime_secs: state.uptime_secs(),
        entity_count: state.registry.read().len(),
        version: env!("CARGO_PKG_VERSION"),
    })
}
