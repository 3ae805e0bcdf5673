//! Health Routes
//!
//! Health check endpoints for monitoring and Kubernetes probes.
//!
//! - GET /health/live - Liveness probe (process is alive)
//! - GET /health/ready - Readiness probe (browser bundle is on disk)
//! - GET /health - Full health status

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::server::dto::HealthResponse;
use crate::server::state::AppState;

/// GET /health/live
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health/ready
///
/// Pages are useless without the browser bundle, so readiness hinges on it.
pub async fn readiness(State(state): State<Arc<AppState>>) -> StatusCode {
    if state.assets_present() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}

/// GET /health
pub async fn full_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let assets_ok = state.assets_present();

    let upstream = if state.upstream.has_fixed_base() {
        "fixed"
    } else {
        "request_host"
    };

    Json(HealthResponse {
        status: if assets_ok { "healthy" } else { "degraded" }.to_string(),
        assets: if assets_ok { "ok" } else { "missing" }.to_string(),
        upstream: upstream.to_string(),
        push_sessions: state.ws_connection_count().await,
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_liveness() {
        let status = liveness().await;
        assert_eq!(status, StatusCode::OK);
    }
}
