//! Creation notification service.

use std::sync::Arc;

use crate::domain::entities::{NewNotification, NotificationRecord};
use crate::domain::repositories::NotificationRepository;
use crate::error::AppError;

/// Cap on the unfiltered notification listing.
pub const MAX_LISTED: i64 = 100;

/// Service behind the notification endpoints.
pub struct NotificationService<R: NotificationRepository> {
    repository: Arc<R>,
}

impl<R: NotificationRepository> NotificationService<R> {
    /// Creates a new notification service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Appends a notification. It is marked sent as soon as it is written.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn notify(
        &self,
        notification: NewNotification,
    ) -> Result<NotificationRecord, AppError> {
        let record = self.repository.append(notification).await?;

        tracing::info!(
            short_code = %record.short_code,
            notification_type = %record.notification_type,
            "Notification recorded"
        );

        Ok(record)
    }

    /// Lists notifications, most recent first.
    ///
    /// With a short code, returns every notification for it; without one,
    /// returns the latest [`MAX_LISTED`] across all codes.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list(&self, short_code: Option<&str>) -> Result<Vec<NotificationRecord>, AppError> {
        match short_code {
            Some(code) => self.repository.list_by_code(code).await,
            None => self.repository.list_recent(MAX_LISTED).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::NotificationType;
    use crate::domain::repositories::MockNotificationRepository;
    use chrono::Utc;

    fn create_test_record(id: i64, code: &str) -> NotificationRecord {
        NotificationRecord {
            id,
            short_code: code.to_string(),
            original_url: "https://example.com".to_string(),
            notification_type: NotificationType::UrlCreated,
            created_at: Utc::now(),
            sent: true,
        }
    }

    #[tokio::test]
    async fn test_notify_appends() {
        let mut mock_repo = MockNotificationRepository::new();

        mock_repo
            .expect_append()
            .withf(|n| n.short_code == "abc123" && n.notification_type == NotificationType::UrlCreated)
            .times(1)
            .returning(|n| Ok(create_test_record(1, &n.short_code)));

        let service = NotificationService::new(Arc::new(mock_repo));

        let record = service
            .notify(NewNotification {
                short_code: "abc123".to_string(),
                original_url: "https://example.com".to_string(),
                notification_type: NotificationType::UrlCreated,
            })
            .await
            .unwrap();

        assert!(record.sent);
    }

    #[tokio::test]
    async fn test_list_filtered_by_code() {
        let mut mock_repo = MockNotificationRepository::new();

        mock_repo
            .expect_list_by_code()
            .withf(|code| code == "abc123")
            .times(1)
            .returning(|code| Ok(vec![create_test_record(2, code), create_test_record(1, code)]));
        mock_repo.expect_list_recent().times(0);

        let service = NotificationService::new(Arc::new(mock_repo));

        let records = service.list(Some("abc123")).await.unwrap();

        assert_eq!(records.len(), 2);
    }

    #[tokio::test]
    async fn test_list_unfiltered_is_capped() {
        let mut mock_repo = MockNotificationRepository::new();

        mock_repo
            .expect_list_recent()
            .withf(|limit| *limit == MAX_LISTED)
            .times(1)
            .returning(|_| Ok(vec![]));
        mock_repo.expect_list_by_code().times(0);

        let service = NotificationService::new(Arc::new(mock_repo));

        assert!(service.list(None).await.unwrap().is_empty());
    }
}
