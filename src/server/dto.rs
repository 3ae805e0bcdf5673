//! Data Transfer Objects
//!
//! JSON bodies returned by the health and push endpoints.

use serde::Serialize;

/// Full health status
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: healthy or degraded
    pub status: String,
    /// Browser bundle status: ok or missing
    pub assets: String,
    /// How the portal API is located: fixed or request_host
    pub upstream: String,
    /// Open push sessions
    pub push_sessions: usize,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Application version
    pub version: String,
}

/// Reply to a published announcement
#[derive(Debug, Serialize)]
pub struct PushAccepted {
    /// Number of push sessions the announcement was handed to
    pub delivered: usize,
}
