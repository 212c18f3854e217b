//! Top-level routers with middleware for each service.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api::middleware::tracing;
use crate::api::routes::{analytics_routes, notification_routes, shortener_routes};
use crate::config::ServiceKind;
use crate::state::{AnalyticsState, NotificationState, ShortenerState};
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Router of the shortener service.
pub fn shortener_router(state: ShortenerState) -> NormalizePath<Router> {
    finish(ServiceKind::Shortener, shortener_routes().with_state(state))
}

/// Router of the analytics service.
pub fn analytics_router(state: AnalyticsState) -> NormalizePath<Router> {
    finish(ServiceKind::Analytics, analytics_routes().with_state(state))
}

/// Router of the notification service.
pub fn notification_router(state: NotificationState) -> NormalizePath<Router> {
    finish(ServiceKind::Notifier, notification_routes().with_state(state))
}

fn finish(kind: ServiceKind, router: Router) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router.layer(tracing::layer(kind.name())))
}
