//! No-op collaborator clients used when a service URL is not configured.

use async_trait::async_trait;
use tracing::debug;

use super::service::{
    AnalyticsClient, ClickNotice, CollaboratorHealth, CreationNotice, DispatchError,
    DispatchResult, NotificationClient,
};
use crate::domain::entities::ClickSummary;

/// Analytics client that never leaves the process.
///
/// Every call returns [`DispatchError::Disabled`], which dispatch sites
/// skip without logging a warning.
pub struct DisabledAnalytics;

impl DisabledAnalytics {
    pub fn new() -> Self {
        debug!("Analytics dispatch disabled");
        Self
    }
}

impl Default for DisabledAnalytics {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AnalyticsClient for DisabledAnalytics {
    async fn track(&self, _click: ClickNotice) -> DispatchResult<()> {
        Err(DispatchError::Disabled)
    }

    async fn fetch_summary(&self, _short_code: &str) -> DispatchResult<ClickSummary> {
        Err(DispatchError::Disabled)
    }

    async fn health_check(&self) -> CollaboratorHealth {
        CollaboratorHealth::Disabled
    }
}

/// Notification client that never leaves the process.
pub struct DisabledNotifications;

impl DisabledNotifications {
    pub fn new() -> Self {
        debug!("Notification dispatch disabled");
        Self
    }
}

impl Default for DisabledNotifications {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NotificationClient for DisabledNotifications {
    async fn notify(&self, _notice: CreationNotice) -> DispatchResult<()> {
        Err(DispatchError::Disabled)
    }

    async fn health_check(&self) -> CollaboratorHealth {
        CollaboratorHealth::Disabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_disabled_clients() {
        let analytics = DisabledAnalytics::new();
        let notifications = DisabledNotifications::new();

        assert!(matches!(
            analytics.fetch_summary("abc123").await,
            Err(DispatchError::Disabled)
        ));
        assert!(matches!(
            notifications
                .notify(CreationNotice::url_created(
                    "abc123".to_string(),
                    "https://example.com".to_string()
                ))
                .await,
            Err(DispatchError::Disabled)
        ));
        assert_eq!(analytics.health_check().await, CollaboratorHealth::Disabled);
        assert_eq!(
            notifications.health_check().await,
            CollaboratorHealth::Disabled
        );
    }
}
