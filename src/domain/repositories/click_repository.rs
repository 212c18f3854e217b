//! Repository trait for the click event log.

use crate::domain::entities::{BrowserCount, ClickEvent, NewClickEvent};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Repository interface for click tracking and aggregation.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteClickRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_click.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClickRepository: Send + Sync {
    /// Appends a click event stamped with the current time.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn record(&self, new_click: NewClickEvent) -> Result<ClickEvent, AppError>;

    /// Counts clicks for a short code, optionally only those after `since`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count_clicks(
        &self,
        short_code: &str,
        since: Option<DateTime<Utc>>,
    ) -> Result<i64, AppError>;

    /// Groups clicks by user agent.
    ///
    /// Sorted by count, descending; ties keep the order in which each user
    /// agent was first seen. At most `limit` entries.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn top_user_agents(
        &self,
        short_code: &str,
        limit: i64,
    ) -> Result<Vec<BrowserCount>, AppError>;

    /// Counts all recorded clicks across every short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count_all(&self) -> Result<i64, AppError>;
}
