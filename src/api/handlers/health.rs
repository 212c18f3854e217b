//! Handlers for health check endpoints.

use axum::{Json, extract::State, http::StatusCode};
use sqlx::SqlitePool;

use crate::api::dto::health::{HealthChecks, HealthResponse};
use crate::infrastructure::persistence::ping;
use crate::state::{AnalyticsState, NotificationState, ShortenerState};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Shortener health.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: Database reachable
/// - **503 Service Unavailable**: Database unreachable
///
/// Collaborator checks are reported but never affect the status.
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "service": "url-shortener",
///   "version": "0.1.0",
///   "checks": {
///     "database": "healthy",
///     "analytics_service": "unhealthy",
///     "notification_service": "disabled"
///   }
/// }
/// ```
pub async fn shortener_health_handler(
    State(state): State<ShortenerState>,
) -> (StatusCode, Json<HealthResponse>) {
    let (database, analytics, notifications) = tokio::join!(
        check_database(&state.db),
        state.analytics.health_check(),
        state.notifications.health_check(),
    );

    respond(
        "url-shortener",
        database,
        HealthChecks {
            database: status_str(database),
            analytics_service: Some(analytics.as_str()),
            notification_service: Some(notifications.as_str()),
        },
    )
}

/// Analytics service health (`GET /health`).
pub async fn analytics_health_handler(
    State(state): State<AnalyticsState>,
) -> (StatusCode, Json<HealthResponse>) {
    database_only("analytics-service", &state.db).await
}

/// Notification service health (`GET /health`).
pub async fn notification_health_handler(
    State(state): State<NotificationState>,
) -> (StatusCode, Json<HealthResponse>) {
    database_only("notification-service", &state.db).await
}

async fn database_only(
    service: &'static str,
    db: &SqlitePool,
) -> (StatusCode, Json<HealthResponse>) {
    let database = check_database(db).await;

    respond(
        service,
        database,
        HealthChecks {
            database: status_str(database),
            analytics_service: None,
            notification_service: None,
        },
    )
}

async fn check_database(db: &SqlitePool) -> bool {
    match ping(db).await {
        Ok(()) => true,
        Err(e) => {
            tracing::error!("Database health check failed: {}", e);
            false
        }
    }
}

fn status_str(healthy: bool) -> &'static str {
    if healthy { "healthy" } else { "unhealthy" }
}

fn respond(
    service: &'static str,
    database_healthy: bool,
    checks: HealthChecks,
) -> (StatusCode, Json<HealthResponse>) {
    let code = if database_healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        code,
        Json(HealthResponse {
            status: status_str(database_healthy),
            service,
            version: VERSION,
            checks,
        }),
    )
}
