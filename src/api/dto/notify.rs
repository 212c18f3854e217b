//! DTOs for the notification endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{NotificationRecord, NotificationType};

/// Creation event sent by the shortener.
///
/// `type` defaults to `url_created`.
#[derive(Debug, Deserialize, Validate)]
pub struct NotifyRequest {
    #[validate(
        required(message = "short_code and original_url are required"),
        length(min = 1, message = "short_code and original_url are required")
    )]
    pub short_code: Option<String>,

    #[validate(
        required(message = "short_code and original_url are required"),
        length(min = 1, message = "short_code and original_url are required")
    )]
    pub original_url: Option<String>,

    #[serde(rename = "type", default)]
    pub notification_type: Option<NotificationType>,
}

#[derive(Debug, Serialize)]
pub struct NotifyResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub short_code: String,
    pub timestamp: DateTime<Utc>,
}

/// Query string of `GET /notifications`.
#[derive(Debug, Deserialize)]
pub struct NotificationsQuery {
    pub short_code: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct NotificationsResponse {
    pub notifications: Vec<NotificationInfo>,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct NotificationInfo {
    pub id: i64,
    pub short_code: String,
    pub original_url: String,
    pub notification_type: NotificationType,
    pub created_at: DateTime<Utc>,
    pub sent: bool,
}

impl From<NotificationRecord> for NotificationInfo {
    fn from(r: NotificationRecord) -> Self {
        Self {
            id: r.id,
            short_code: r.short_code,
            original_url: r.original_url,
            notification_type: r.notification_type,
            created_at: r.created_at,
            sent: r.sent,
        }
    }
}

impl NotificationsResponse {
    pub fn new(records: Vec<NotificationRecord>) -> Self {
        let notifications: Vec<NotificationInfo> =
            records.into_iter().map(NotificationInfo::from).collect();

        Self {
            count: notifications.len(),
            notifications,
        }
    }
}
