//! Handler for click analytics endpoint.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::analytics::AnalyticsResponse;
use crate::error::AppError;
use crate::state::AnalyticsState;

/// Aggregates the click log of a short code.
///
/// # Endpoint
///
/// `GET /analytics/{code}`
///
/// Codes never tracked return zero counts and an empty browser list.
///
/// # Response
///
/// ```json
/// {
///   "short_code": "aB3xY9",
///   "total_clicks": 12,
///   "weekly_clicks": 4,
///   "popular_browsers": [
///     { "browser": "Mozilla/5.0 ...", "count": 9 },
///     { "browser": "curl/8.0", "count": 3 }
///   ]
/// }
/// ```
pub async fn analytics_handler(
    Path(code): Path<String>,
    State(state): State<AnalyticsState>,
) -> Result<Json<AnalyticsResponse>, AppError> {
    let summary = state.analytics_service.summary(&code).await?;

    Ok(Json(summary.into()))
}
