//! Collaborator client traits, payloads and error types.

use async_trait::async_trait;

use crate::domain::entities::{ClickSummary, NotificationType};

/// Errors from a single outbound call to a collaborator service.
///
/// These never reach an HTTP client of the shortener: dispatch sites log
/// and discard them.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("collaborator is disabled")]
    Disabled,

    #[error("request timed out")]
    Timeout,

    #[error("connection failed: {0}")]
    Connection(String),

    #[error("unexpected status {0}")]
    Status(u16),

    #[error("invalid response body: {0}")]
    Decode(String),
}

/// Result type for collaborator calls.
pub type DispatchResult<T> = Result<T, DispatchError>;

/// Reachability of a collaborator as seen by the shortener's health probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollaboratorHealth {
    Healthy,
    Unhealthy,
    Disabled,
}

impl CollaboratorHealth {
    pub fn as_str(self) -> &'static str {
        match self {
            CollaboratorHealth::Healthy => "healthy",
            CollaboratorHealth::Unhealthy => "unhealthy",
            CollaboratorHealth::Disabled => "disabled",
        }
    }
}

/// Click forwarded from a redirect to the analytics service.
#[derive(Debug, Clone, PartialEq)]
pub struct ClickNotice {
    pub short_code: String,
    pub user_agent: Option<String>,
    pub ip_address: Option<String>,
}

/// Creation event forwarded from a shorten request to the notification service.
#[derive(Debug, Clone, PartialEq)]
pub struct CreationNotice {
    pub short_code: String,
    pub original_url: String,
    pub notification_type: NotificationType,
}

impl CreationNotice {
    /// Builds the `url_created` notice sent after a successful shorten.
    pub fn url_created(short_code: String, original_url: String) -> Self {
        Self {
            short_code,
            original_url,
            notification_type: NotificationType::UrlCreated,
        }
    }
}

/// Client for the analytics service.
///
/// # Implementations
///
/// - [`crate::infrastructure::collaborators::HttpAnalyticsClient`] - HTTP/JSON client
/// - [`crate::infrastructure::collaborators::DisabledAnalytics`] - No-op when no URL is configured
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AnalyticsClient: Send + Sync {
    /// Reports one click. Bounded by the dispatch timeout.
    async fn track(&self, click: ClickNotice) -> DispatchResult<()>;

    /// Fetches the aggregated analytics for a short code.
    async fn fetch_summary(&self, short_code: &str) -> DispatchResult<ClickSummary>;

    /// Probes the service's health endpoint.
    async fn health_check(&self) -> CollaboratorHealth;
}

/// Client for the notification service.
///
/// # Implementations
///
/// - [`crate::infrastructure::collaborators::HttpNotificationClient`] - HTTP/JSON client
/// - [`crate::infrastructure::collaborators::DisabledNotifications`] - No-op when no URL is configured
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationClient: Send + Sync {
    /// Reports one creation event. Bounded by the dispatch timeout.
    async fn notify(&self, notice: CreationNotice) -> DispatchResult<()>;

    /// Probes the service's health endpoint.
    async fn health_check(&self) -> CollaboratorHealth;
}
