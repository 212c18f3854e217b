//! DTOs for click tracking endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Click report sent by the shortener on every redirect.
///
/// The user agent and client IP travel in request headers.
#[derive(Debug, Deserialize, Validate)]
pub struct TrackRequest {
    #[validate(
        required(message = "short_code is required"),
        length(min = 1, message = "short_code is required")
    )]
    pub short_code: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TrackResponse {
    pub status: &'static str,
    pub message: &'static str,
}

impl TrackResponse {
    pub fn tracked() -> Self {
        Self {
            status: "success",
            message: "Click tracked",
        }
    }
}
