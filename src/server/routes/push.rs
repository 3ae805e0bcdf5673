//! Push Routes
//!
//! - POST /push/announcements - Relay an announcement to live dashboards

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use hackportal_core::PushPayload;
use std::sync::Arc;

use crate::server::dto::PushAccepted;
use crate::server::error::{PortalError, PortalResult};
use crate::server::state::AppState;
use crate::websocket::WsEvent;

/// POST /push/announcements
///
/// Accepts a push payload whose `data.notification` is an encoded
/// announcement and fans it out to every subscribed dashboard.
pub async fn publish_announcement(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<PushPayload>, JsonRejection>,
) -> PortalResult<(StatusCode, Json<PushAccepted>)> {
    let Json(payload) = payload.map_err(|e| PortalError::Validation(e.body_text()))?;

    let announcement = payload
        .decode()
        .map_err(|e| PortalError::Validation(e.to_string()))?;

    let delivered = state.ws_hub.broadcast(&WsEvent::announcement(payload)).await;

    tracing::info!(
        announcement = %announcement.announcement,
        delivered,
        "Announcement published"
    );

    Ok((StatusCode::ACCEPTED, Json(PushAccepted { delivered })))
}
