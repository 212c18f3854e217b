//! Handlers for the notification endpoints.

use axum::{
    Json,
    extract::{Query, State, rejection::JsonRejection},
    http::StatusCode,
};
use chrono::Utc;
use validator::Validate;

use crate::api::dto::notify::{
    NotificationsQuery, NotificationsResponse, NotifyRequest, NotifyResponse,
};
use crate::domain::entities::NewNotification;
use crate::error::AppError;
use crate::state::NotificationState;

/// Records a notification.
///
/// # Endpoint
///
/// `POST /notify`
///
/// # Request
///
/// ```json
/// { "short_code": "aB3xY9", "original_url": "https://example.com", "type": "url_created" }
/// ```
///
/// `type` is optional and defaults to `url_created`.
///
/// # Errors
///
/// Returns 400 Bad Request if `short_code` or `original_url` is missing.
pub async fn notify_handler(
    State(state): State<NotificationState>,
    payload: Result<Json<NotifyRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<NotifyResponse>), AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let record = state
        .notification_service
        .notify(NewNotification {
            short_code: payload.short_code.unwrap_or_default(),
            original_url: payload.original_url.unwrap_or_default(),
            notification_type: payload.notification_type.unwrap_or_default(),
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(NotifyResponse {
            status: "success",
            message: "Notification sent",
            short_code: record.short_code,
            timestamp: Utc::now(),
        }),
    ))
}

/// Lists notifications, most recent first.
///
/// # Endpoint
///
/// `GET /notifications?short_code={code}`
///
/// Without `short_code` (or with an empty one), returns the latest 100
/// notifications across all codes.
pub async fn notifications_handler(
    State(state): State<NotificationState>,
    Query(query): Query<NotificationsQuery>,
) -> Result<Json<NotificationsResponse>, AppError> {
    let short_code = query.short_code.as_deref().filter(|c| !c.is_empty());

    let records = state.notification_service.list(short_code).await?;

    Ok(Json(NotificationsResponse::new(records)))
}
