//! Clients for the analytics and notification services.
//!
//! Provides [`AnalyticsClient`] and [`NotificationClient`] traits with two
//! implementations each:
//! - [`HttpAnalyticsClient`] / [`HttpNotificationClient`] - reqwest-backed clients
//! - [`DisabledAnalytics`] / [`DisabledNotifications`] - No-op when the service URL is empty
//!
//! Calls made on the request path go through [`dispatch_click`] and
//! [`dispatch_creation`]: the call runs on a detached task, is bounded by
//! the client's timeout, and its outcome is only logged.

mod disabled;
mod http_client;
mod service;

pub use disabled::{DisabledAnalytics, DisabledNotifications};
pub use http_client::{HttpAnalyticsClient, HttpNotificationClient, build_http_client};
pub use service::{
    AnalyticsClient, ClickNotice, CollaboratorHealth, CreationNotice, DispatchError,
    DispatchResult, NotificationClient,
};

#[cfg(test)]
pub use service::{MockAnalyticsClient, MockNotificationClient};

use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

fn log_outcome(target: &str, short_code: &str, result: DispatchResult<()>) {
    match result {
        Ok(()) => debug!("Dispatched {} for {}", target, short_code),
        Err(DispatchError::Disabled) => {}
        Err(e) => warn!("{} dispatch failed for {}: {}", target, short_code, e),
    }
}

/// Reports a redirect to the analytics service without waiting for it.
///
/// The returned handle is only awaited by tests.
pub fn dispatch_click(analytics: Arc<dyn AnalyticsClient>, click: ClickNotice) -> JoinHandle<()> {
    tokio::spawn(async move {
        let short_code = click.short_code.clone();
        let result = analytics.track(click).await;
        log_outcome("Analytics", &short_code, result);
    })
}

/// Reports a newly created link to the notification service without
/// waiting for it.
pub fn dispatch_creation(
    notifications: Arc<dyn NotificationClient>,
    notice: CreationNotice,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let short_code = notice.short_code.clone();
        let result = notifications.notify(notice).await;
        log_outcome("Notification", &short_code, result);
    })
}
