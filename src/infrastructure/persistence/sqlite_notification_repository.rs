//! SQLite implementation of the notification log.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::entities::{NewNotification, NotificationRecord, NotificationType};
use crate::domain::repositories::NotificationRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct NotificationRow {
    id: i64,
    short_code: String,
    original_url: String,
    notification_type: String,
    created_at: DateTime<Utc>,
    sent: bool,
}

impl From<NotificationRow> for NotificationRecord {
    fn from(r: NotificationRow) -> Self {
        NotificationRecord {
            id: r.id,
            short_code: r.short_code,
            original_url: r.original_url,
            notification_type: NotificationType::from(r.notification_type),
            created_at: r.created_at,
            sent: r.sent,
        }
    }
}

/// SQLite repository for the append-only notification log.
pub struct SqliteNotificationRepository {
    pool: Arc<SqlitePool>,
    write_lock: Mutex<()>,
}

impl SqliteNotificationRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self {
            pool,
            write_lock: Mutex::new(()),
        }
    }
}

#[async_trait]
impl NotificationRepository for SqliteNotificationRepository {
    async fn append(
        &self,
        new_notification: NewNotification,
    ) -> Result<NotificationRecord, AppError> {
        let _guard = self.write_lock.lock().await;

        let row = sqlx::query_as::<_, NotificationRow>(
            r#"
            INSERT INTO notifications (short_code, original_url, notification_type, created_at, sent)
            VALUES (?1, ?2, ?3, ?4, 1)
            RETURNING id, short_code, original_url, notification_type, created_at, sent
            "#,
        )
        .bind(&new_notification.short_code)
        .bind(&new_notification.original_url)
        .bind(new_notification.notification_type.as_str())
        .bind(Utc::now())
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn list_by_code(&self, short_code: &str) -> Result<Vec<NotificationRecord>, AppError> {
        let rows = sqlx::query_as::<_, NotificationRow>(
            r#"
            SELECT id, short_code, original_url, notification_type, created_at, sent
            FROM notifications
            WHERE short_code = ?1
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(short_code)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(NotificationRecord::from).collect())
    }

    async fn list_recent(&self, limit: i64) -> Result<Vec<NotificationRecord>, AppError> {
        let rows = sqlx::query_as::<_, NotificationRow>(
            r#"
            SELECT id, short_code, original_url, notification_type, created_at, sent
            FROM notifications
            ORDER BY created_at DESC, id DESC
            LIMIT ?1
            "#,
        )
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(NotificationRecord::from).collect())
    }
}

