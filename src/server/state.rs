//! Application State
//!
//! Shared state accessible by all handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use crate::config::Config;
use crate::upstream::{PortalApiClient, UpstreamError};
use crate::websocket::{ConnectionHub, HubConfig};

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Loaded configuration
    pub config: Arc<Config>,
    /// Client for the internal portal API
    pub upstream: Arc<PortalApiClient>,
    /// Push session hub
    pub ws_hub: Arc<ConnectionHub>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, UpstreamError> {
        let upstream = PortalApiClient::new(&config.upstream)?;
        let hub_config = HubConfig {
            max_connections: config.push.max_connections,
        };

        Ok(Self {
            config: Arc::new(config),
            upstream: Arc::new(upstream),
            ws_hub: Arc::new(ConnectionHub::new(hub_config)),
            start_time: Instant::now(),
        })
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    /// Whether the compiled browser bundle is on disk
    pub fn assets_present(&self) -> bool {
        Path::new(&self.config.server.assets_dir).is_dir()
    }

    /// Get push session count
    pub async fn ws_connection_count(&self) -> usize {
        self.ws_hub.connection_count().await
    }
}
