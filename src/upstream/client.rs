//! Portal API Client
//!
//! HTTP client for the internal portal API.

use hackportal_core::{Announcement, Challenge, KeynoteSpeaker};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::future::Future;
use std::time::Duration;
use thiserror::Error;

use crate::config::UpstreamConfig;

const ANNOUNCEMENTS_PATH: &str = "/api/announcements/";
const KEYNOTE_SPEAKERS_PATH: &str = "/api/keynotespeakers";
const CHALLENGES_PATH: &str = "/api/challenges/";

/// Scheme and authority the API is reached at, e.g. `https://portal.example`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiBase(String);

impl ApiBase {
    pub fn new(url: impl Into<String>) -> Self {
        let url = url.into();
        Self(url.trim_end_matches('/').to_string())
    }

    /// Derive the base from an inbound page request.
    ///
    /// The scheme is whatever precedes `://` in the `Referer` header, falling
    /// back to `http`; the authority is the `Host` header.
    pub fn from_headers(referer: Option<&str>, host: Option<&str>) -> Result<Self, UpstreamError> {
        let host = host
            .map(str::trim)
            .filter(|h| !h.is_empty())
            .ok_or(UpstreamError::MissingHost)?;

        let scheme = referer
            .and_then(|r| r.split_once("://"))
            .map(|(scheme, _)| scheme)
            .filter(|s| !s.is_empty())
            .unwrap_or("http");

        Ok(Self(format!("{}://{}", scheme, host)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.0, path)
    }
}

/// Client for the internal portal API
pub struct PortalApiClient {
    client: Client,
    fixed_base: Option<ApiBase>,
}

impl PortalApiClient {
    pub fn new(config: &UpstreamConfig) -> Result<Self, UpstreamError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .build()
            .map_err(UpstreamError::Client)?;

        Ok(Self {
            client,
            fixed_base: config.base_url.as_deref().map(ApiBase::new),
        })
    }

    /// Whether the API base is fixed by configuration
    pub fn has_fixed_base(&self) -> bool {
        self.fixed_base.is_some()
    }

    /// API base for a page request: the configured one, else derived from
    /// the request headers
    pub fn resolve_base(
        &self,
        referer: Option<&str>,
        host: Option<&str>,
    ) -> Result<ApiBase, UpstreamError> {
        match &self.fixed_base {
            Some(base) => Ok(base.clone()),
            None => ApiBase::from_headers(referer, host),
        }
    }

    pub async fn announcements(&self, base: &ApiBase) -> Result<Vec<Announcement>, UpstreamError> {
        self.get_list(base, ANNOUNCEMENTS_PATH).await
    }

    pub async fn keynote_speakers(
        &self,
        base: &ApiBase,
    ) -> Result<Vec<KeynoteSpeaker>, UpstreamError> {
        self.get_list(base, KEYNOTE_SPEAKERS_PATH).await
    }

    /// Challenges in the order the API returns them
    pub async fn challenges(&self, base: &ApiBase) -> Result<Vec<Challenge>, UpstreamError> {
        self.get_list(base, CHALLENGES_PATH).await
    }

    async fn get_list<T: DeserializeOwned>(
        &self,
        base: &ApiBase,
        path: &str,
    ) -> Result<Vec<T>, UpstreamError> {
        let url = base.url(path);

        let response = self.client.get(&url).send().await.map_err(|e| {
            if e.is_timeout() {
                UpstreamError::Timeout { url: url.clone() }
            } else if e.is_connect() {
                UpstreamError::Unavailable { url: url.clone() }
            } else {
                UpstreamError::Request(e)
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                url,
            });
        }

        let items = response
            .json::<Vec<T>>()
            .await
            .map_err(|source| UpstreamError::Decode {
                url: url.clone(),
                source,
            })?;

        tracing::debug!(url = %url, count = items.len(), "Fetched collection");
        Ok(items)
    }
}

/// Await a collection fetch, degrading any failure to an empty list.
///
/// Pages render an empty section instead of failing when the API is down.
pub async fn fetch_or_empty<T, F>(collection: &str, fetch: F) -> Vec<T>
where
    F: Future<Output = Result<Vec<T>, UpstreamError>>,
{
    match fetch.await {
        Ok(items) => items,
        Err(e) => {
            tracing::warn!(
                collection = %collection,
                error = %e,
                "Portal API fetch failed, rendering empty section"
            );
            Vec::new()
        }
    }
}

/// Errors talking to the internal portal API
#[derive(Error, Debug)]
pub enum UpstreamError {
    #[error("Request has no Host header to derive the API base from")]
    MissingHost,

    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Portal API unavailable at {url}")]
    Unavailable { url: String },

    #[error("Portal API request to {url} timed out")]
    Timeout { url: String },

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Portal API returned {status} for {url}")]
    Status { status: u16, url: String },

    #[error("Unexpected response body from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}
