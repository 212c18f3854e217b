//! Handler for click tracking endpoint.

use axum::{
    Json,
    extract::{ConnectInfo, State, rejection::JsonRejection},
    http::HeaderMap,
};
use std::net::SocketAddr;
use validator::Validate;

use crate::api::dto::track::{TrackRequest, TrackResponse};
use crate::domain::entities::NewClickEvent;
use crate::error::AppError;
use crate::state::AnalyticsState;
use crate::utils::request_info::{client_ip, user_agent};

/// Records one click.
///
/// # Endpoint
///
/// `POST /track`
///
/// # Request
///
/// ```json
/// { "short_code": "aB3xY9" }
/// ```
///
/// The `User-Agent` header is stored as the browser (`Unknown` when
/// absent). The client IP is the first `X-Forwarded-For` entry, then
/// `X-Real-IP`, then the peer address.
///
/// # Errors
///
/// Returns 400 Bad Request if `short_code` is missing.
pub async fn track_handler(
    State(state): State<AnalyticsState>,
    headers: HeaderMap,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    payload: Result<Json<TrackRequest>, JsonRejection>,
) -> Result<Json<TrackResponse>, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let click = NewClickEvent::new(
        payload.short_code.unwrap_or_default(),
        user_agent(&headers),
        client_ip(&headers, Some(addr)),
    );

    let event = state.analytics_service.track(click).await?;
    tracing::debug!(short_code = %event.short_code, id = event.id, "Click tracked");

    Ok(Json(TrackResponse::tracked()))
}
