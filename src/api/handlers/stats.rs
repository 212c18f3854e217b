//! Handler for link statistics endpoint.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::stats::{AnalyticsField, StatsResponse};
use crate::error::AppError;
use crate::infrastructure::collaborators::DispatchError;
use crate::state::ShortenerState;

/// Returns the click counter of a short link with its analytics.
///
/// # Endpoint
///
/// `GET /stats/{code}`
///
/// # Response
///
/// ```json
/// {
///   "short_code": "aB3xY9",
///   "original_url": "https://example.com",
///   "click_count": 3,
///   "created_at": "2025-01-01T12:00:00Z",
///   "analytics": {
///     "short_code": "aB3xY9",
///     "total_clicks": 3,
///     "weekly_clicks": 3,
///     "popular_browsers": [{ "browser": "curl/8.0", "count": 3 }]
///   }
/// }
/// ```
///
/// `analytics` is `{}` when the analytics service fails or does not answer
/// within the fetch timeout. `click_count` and `total_clicks` may differ.
///
/// # Errors
///
/// Returns 404 Not Found if the code doesn't exist.
pub async fn stats_handler(
    Path(code): Path<String>,
    State(state): State<ShortenerState>,
) -> Result<Json<StatsResponse>, AppError> {
    let stats = state.link_service.get_stats(&code).await?;

    let analytics = match state.analytics.fetch_summary(&stats.short_code).await {
        Ok(summary) => AnalyticsField::Available(summary.into()),
        Err(DispatchError::Disabled) => AnalyticsField::Unavailable {},
        Err(e) => {
            tracing::warn!("Analytics fetch failed for {}: {}", stats.short_code, e);
            AnalyticsField::Unavailable {}
        }
    };

    Ok(Json(StatsResponse::new(stats, analytics)))
}
