//! Internal Portal API
//!
//! Read-only client for the collections the pages are built from:
//!
//! - `GET /api/announcements/`
//! - `GET /api/keynotespeakers`
//! - `GET /api/challenges/`
//!
//! Each endpoint returns a JSON array. Unless a fixed base URL is configured,
//! the API is reached through the same host that served the page, with the
//! scheme taken from the inbound `Referer` header.

mod client;

pub use client::{fetch_or_empty, ApiBase, PortalApiClient, UpstreamError};
