//! Repository trait for the notification log.

use crate::domain::entities::{NewNotification, NotificationRecord};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for creation notifications.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteNotificationRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationRepository: Send + Sync {
    /// Appends a notification with `sent = true`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn append(&self, new_notification: NewNotification)
    -> Result<NotificationRecord, AppError>;

    /// Lists notifications for one short code, most recent first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_by_code(&self, short_code: &str) -> Result<Vec<NotificationRecord>, AppError>;

    /// Lists the `limit` most recent notifications across all codes.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_recent(&self, limit: i64) -> Result<Vec<NotificationRecord>, AppError>;
}
