//! Page Routes
//!
//! - GET / - Landing page
//! - GET /dashboard - Attendee dashboard
//!
//! Each handler pulls its collections from the portal API while rendering.
//! A failed fetch renders that section empty instead of failing the page.

use axum::{
    extract::State,
    http::{header, HeaderMap},
    response::Html,
};
use hackportal_core::{sort_by_rank, DashboardProps, HomeProps};
use std::sync::Arc;

use crate::pages;
use crate::server::error::PortalResult;
use crate::server::state::AppState;
use crate::upstream::{fetch_or_empty, ApiBase};

/// GET /
pub async fn home(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> PortalResult<Html<String>> {
    let (keynote_speakers, challenges) = match api_base(&state, &headers) {
        Some(base) => {
            tokio::join!(
                fetch_or_empty("keynote speakers", state.upstream.keynote_speakers(&base)),
                fetch_or_empty("challenges", state.upstream.challenges(&base)),
            )
        }
        None => (Vec::new(), Vec::new()),
    };

    let props = HomeProps {
        keynote_speakers,
        challenges: sort_by_rank(challenges),
        site: state.config.site.clone(),
    };

    Ok(Html(pages::render_home(&props)?))
}

/// GET /dashboard
pub async fn dashboard(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> PortalResult<Html<String>> {
    let announcements = match api_base(&state, &headers) {
        Some(base) => fetch_or_empty("announcements", state.upstream.announcements(&base)).await,
        None => Vec::new(),
    };

    let props = DashboardProps {
        announcements,
        spotlight: state.config.spotlight.clone(),
    };

    Ok(Html(pages::render_dashboard(&state.config.site, &props)?))
}

/// Work out where the portal API lives for this request
fn api_base(state: &AppState, headers: &HeaderMap) -> Option<ApiBase> {
    let header_str = |name: header::HeaderName| headers.get(name).and_then(|v| v.to_str().ok());

    match state
        .upstream
        .resolve_base(header_str(header::REFERER), header_str(header::HOST))
    {
        Ok(base) => Some(base),
        Err(e) => {
            tracing::warn!(error = %e, "Cannot locate portal API, rendering empty sections");
            None
        }
    }
}
