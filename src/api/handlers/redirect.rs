//! Handler for short URL redirect.

use axum::{
    extract::{ConnectInfo, Path, State},
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::IntoResponse,
};
use serde_json::json;
use std::net::SocketAddr;

use crate::error::AppError;
use crate::infrastructure::collaborators::{ClickNotice, dispatch_click};
use crate::state::ShortenerState;
use crate::utils::request_info::{client_ip, user_agent};

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Look up the code; unknown codes end here with 404
/// 2. Increment the click counter (completes before the response)
/// 3. Dispatch the click to the analytics service in the background
/// 4. Return 302 Found
///
/// The analytics dispatch is not awaited, so the analytics log may lag
/// behind or miss clicks counted here.
///
/// # Errors
///
/// Returns 404 Not Found with `{"error": "Short URL not found"}` if the
/// code doesn't exist.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<ShortenerState>,
    headers: HeaderMap,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
) -> Result<impl IntoResponse, AppError> {
    let link = state.link_service.get_link_by_code(&code).await?;

    let location = location_header(&link.original_url)?;

    let clicks = state.link_service.increment_clicks(&link.short_code).await?;
    tracing::debug!(short_code = %link.short_code, clicks, "Redirecting");

    dispatch_click(
        state.analytics.clone(),
        ClickNotice {
            short_code: link.short_code,
            user_agent: user_agent(&headers).map(str::to_string),
            ip_address: client_ip(&headers, Some(addr)),
        },
    );

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]))
}

/// Builds the `Location` value, falling back to the percent-encoded form
/// for URLs with characters not allowed in a header.
fn location_header(original_url: &str) -> Result<HeaderValue, AppError> {
    if let Ok(value) = HeaderValue::from_str(original_url) {
        return Ok(value);
    }

    url::Url::parse(original_url)
        .ok()
        .and_then(|url| HeaderValue::from_str(url.as_str()).ok())
        .ok_or_else(|| {
            AppError::internal(
                "Stored URL cannot be used as a redirect target",
                json!({ "url": original_url }),
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_header_plain() {
        let value = location_header("https://example.com/path?q=1").unwrap();
        assert_eq!(value, "https://example.com/path?q=1");
    }

    #[test]
    fn test_location_header_encodes_non_ascii() {
        let value = location_header("https://example.com/путь").unwrap();
        assert!(value.to_str().unwrap().starts_with("https://example.com/%D0%BF"));
    }
}
