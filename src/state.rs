//! Shared state injected into the handlers of each service.

use sqlx::SqlitePool;
use std::sync::Arc;

use crate::application::services::{AnalyticsService, LinkService, NotificationService};
use crate::infrastructure::collaborators::{AnalyticsClient, NotificationClient};
use crate::infrastructure::persistence::{
    SqliteClickRepository, SqliteLinkRepository, SqliteNotificationRepository,
};

/// State of the shortener service.
#[derive(Clone)]
pub struct ShortenerState {
    pub db: Arc<SqlitePool>,
    pub link_service: Arc<LinkService<SqliteLinkRepository>>,
    pub analytics: Arc<dyn AnalyticsClient>,
    pub notifications: Arc<dyn NotificationClient>,
    /// Prefix for `short_url`; the request's `Host` is used when unset.
    pub public_base_url: Option<String>,
}

impl ShortenerState {
    pub fn new(
        db: Arc<SqlitePool>,
        analytics: Arc<dyn AnalyticsClient>,
        notifications: Arc<dyn NotificationClient>,
        public_base_url: Option<String>,
    ) -> Self {
        let link_repository = Arc::new(SqliteLinkRepository::new(db.clone()));

        Self {
            db,
            link_service: Arc::new(LinkService::new(link_repository)),
            analytics,
            notifications,
            public_base_url,
        }
    }
}

/// State of the analytics service.
#[derive(Clone)]
pub struct AnalyticsState {
    pub db: Arc<SqlitePool>,
    pub analytics_service: Arc<AnalyticsService<SqliteClickRepository>>,
}

impl AnalyticsState {
    pub fn new(db: Arc<SqlitePool>) -> Self {
        let click_repository = Arc::new(SqliteClickRepository::new(db.clone()));

        Self {
            db,
            analytics_service: Arc::new(AnalyticsService::new(click_repository)),
        }
    }
}

/// State of the notification service.
#[derive(Clone)]
pub struct NotificationState {
    pub db: Arc<SqlitePool>,
    pub notification_service: Arc<NotificationService<SqliteNotificationRepository>>,
}

impl NotificationState {
    pub fn new(db: Arc<SqlitePool>) -> Self {
        let notification_repository = Arc::new(SqliteNotificationRepository::new(db.clone()));

        Self {
            db,
            notification_service: Arc::new(NotificationService::new(notification_repository)),
        }
    }
}
