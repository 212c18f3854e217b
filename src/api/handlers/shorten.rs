//! Handler for link shortening endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode},
};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::infrastructure::collaborators::{CreationNotice, dispatch_creation};
use crate::state::ShortenerState;
use crate::utils::request_info::request_host;

/// Creates a short link for a URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "example.com" }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// {
///   "short_code": "aB3xY9",
///   "short_url": "http://localhost:5000/aB3xY9",
///   "original_url": "https://example.com"
/// }
/// ```
///
/// # Side Effects
///
/// A `url_created` notification is dispatched to the notification service
/// after the link is stored. Its outcome never changes the response.
///
/// # Errors
///
/// Returns 400 Bad Request if `url` is missing or invalid, or if no public
/// base URL is configured and the `Host` header is missing.
pub async fn shorten_handler(
    State(state): State<ShortenerState>,
    headers: HeaderMap,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let base_url = match &state.public_base_url {
        Some(base) => base.trim_end_matches('/').to_string(),
        None => format!("http://{}", request_host(&headers)?),
    };

    let link = state
        .link_service
        .create_short_link(payload.url.as_deref().unwrap_or_default())
        .await?;

    tracing::info!(short_code = %link.short_code, "Short link created");

    dispatch_creation(
        state.notifications.clone(),
        CreationNotice::url_created(link.short_code.clone(), link.original_url.clone()),
    );

    Ok((
        StatusCode::CREATED,
        Json(ShortenResponse {
            short_url: format!("{}/{}", base_url, link.short_code),
            short_code: link.short_code,
            original_url: link.original_url,
        }),
    ))
}
