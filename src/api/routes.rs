//! Route tables of the three services.

use crate::api::handlers::{
    analytics_handler, analytics_health_handler, notification_health_handler,
    notifications_handler, notify_handler, redirect_handler, shorten_handler,
    shortener_health_handler, stats_handler, track_handler,
};
use crate::state::{AnalyticsState, NotificationState, ShortenerState};
use axum::{
    Router,
    routing::{get, post},
};

/// Shortener routes.
///
/// # Endpoints
///
/// - `POST /shorten`       - Create a short link
/// - `GET  /stats/{code}`  - Click counter with embedded analytics
/// - `GET  /health`        - Database and collaborator checks
/// - `GET  /{code}`        - Redirect
pub fn shortener_routes() -> Router<ShortenerState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/stats/{code}", get(stats_handler))
        .route("/health", get(shortener_health_handler))
        .route("/{code}", get(redirect_handler))
}

/// Analytics service routes.
///
/// # Endpoints
///
/// - `POST /track`             - Record a click
/// - `GET  /analytics/{code}`  - Aggregated clicks
/// - `GET  /health`            - Database check
pub fn analytics_routes() -> Router<AnalyticsState> {
    Router::new()
        .route("/track", post(track_handler))
        .route("/analytics/{code}", get(analytics_handler))
        .route("/health", get(analytics_health_handler))
}

/// Notification service routes.
///
/// # Endpoints
///
/// - `POST /notify`         - Record a notification
/// - `GET  /notifications`  - List notifications, optionally by `short_code`
/// - `GET  /health`         - Database check
pub fn notification_routes() -> Router<NotificationState> {
    Router::new()
        .route("/notify", post(notify_handler))
        .route("/notifications", get(notifications_handler))
        .route("/health", get(notification_health_handler))
}
