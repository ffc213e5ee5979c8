//! Health Routes
//!
//! - GET /health/live - Liveness probe (process is alive)
//! - GET /health/ready - Readiness probe (frontend bundle present)
//! - GET /health - Full health status

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use std::sync::Arc;

use super::SiteServerState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub bundle: String,
    pub uptime_seconds: u64,
    pub version: String,
}

/// GET /health/live
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health/ready
///
/// Ready once the built frontend has an `index.html` to serve.
pub async fn readiness(State(state): State<Arc<SiteServerState>>) -> StatusCode {
    if state.bundle_ready() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}

/// GET /health
pub async fn full_health(State(state): State<Arc<SiteServerState>>) -> Json<HealthResponse> {
    let ready = state.bundle_ready();

    Json(HealthResponse {
        status: if ready { "healthy" } else { "degraded" }.to_string(),
        bundle: if ready { "ok" } else { "missing" }.to_string(),
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
