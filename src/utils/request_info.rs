//! Request metadata extraction from HTTP headers.

use crate::AppError;
use axum::http::{HeaderMap, HeaderName, header};
use std::net::SocketAddr;

/// Header carrying the original client address through a proxy or a
/// service-to-service call.
pub const X_FORWARDED_FOR: HeaderName = HeaderName::from_static("x-forwarded-for");

/// Header set by some reverse proxies instead of `X-Forwarded-For`.
pub const X_REAL_IP: HeaderName = HeaderName::from_static("x-real-ip");

/// Extracts the `Host` header value, port included.
///
/// Used to build `short_url` when no public base URL is configured.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if:
/// - The `Host` header is missing or empty
/// - The header value contains invalid UTF-8
///
/// # Examples
///
/// ```ignore
/// let mut headers = HeaderMap::new();
/// headers.insert(header::HOST, "localhost:5000".parse().unwrap());
///
/// assert_eq!(request_host(&headers).unwrap(), "localhost:5000");
/// ```
pub fn request_host(headers: &HeaderMap) -> Result<String, AppError> {
    let host = headers
        .get(header::HOST)
        .ok_or_else(|| AppError::bad_request("Missing Host header", serde_json::json!({})))?
        .to_str()
        .map_err(|_| AppError::bad_request("Invalid Host header", serde_json::json!({})))?
        .trim();

    if host.is_empty() {
        return Err(AppError::bad_request(
            "Missing Host header",
            serde_json::json!({}),
        ));
    }

    Ok(host.to_string())
}

/// Resolves the client IP address.
///
/// Priority:
/// 1. First entry of `X-Forwarded-For`
/// 2. `X-Real-IP`
/// 3. The TCP peer address
pub fn client_ip(headers: &HeaderMap, peer: Option<SocketAddr>) -> Option<String> {
    let forwarded = headers
        .get(X_FORWARDED_FOR)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| !v.is_empty());

    if let Some(ip) = forwarded {
        return Some(ip.to_string());
    }

    let real_ip = headers
        .get(X_REAL_IP)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty());

    if let Some(ip) = real_ip {
        return Some(ip.to_string());
    }

    peer.map(|addr| addr.ip().to_string())
}

/// Returns the `User-Agent` header if present and valid UTF-8.
pub fn user_agent(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
}
