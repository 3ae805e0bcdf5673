//! # HackPortal
//!
//! Server for a hackathon portal: a landing page and an attendee dashboard,
//! plus the push channel that keeps open dashboards up to date.
//!
//! Pages are served as HTML shells with their data embedded as JSON props.
//! The browser bundle (`hackportal-ui`) reads the props and renders the
//! interactive page.
//!
//! ## Modules
//!
//! - [`config`]: TOML configuration with environment overrides
//! - [`upstream`]: Client for the internal portal API
//! - [`pages`]: HTML page shells
//! - [`server`]: Axum router, handlers and HTTP errors
//! - [`websocket`]: Announcement push relay
//!
//! Domain types live in the `hackportal-core` crate, shared with the browser.

pub mod config;
pub mod pages;
pub mod server;
pub mod upstream;
pub mod websocket;

pub use config::{Config, ConfigError, LoggingConfig};
pub use pages::{render_dashboard, render_home, RenderError};
pub use server::{build_router, serve, AppState, PortalError, PortalResult};
pub use upstream::{ApiBase, PortalApiClient, UpstreamError};
pub use websocket::{
    websocket_handler, ClientMessage, ConnectionHub, HubConfig, HubError, ServerMessage, WsEvent,
};
