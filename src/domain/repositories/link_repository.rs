//! Repository trait for short link data access.

use crate::domain::entities::{NewLink, ShortLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the short code to URL mapping.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteLinkRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_link.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a new short link with `click_count = 0`.
    ///
    /// Uniqueness of the short code is enforced atomically by the insert.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the short code already exists.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_link: NewLink) -> Result<ShortLink, AppError>;

    /// Finds a link by its short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_code(&self, short_code: &str) -> Result<Option<ShortLink>, AppError>;

    /// Atomically increments the click counter.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(count))` with the new counter value
    /// - `Ok(None)` if no link has this code
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn increment_clicks(&self, short_code: &str) -> Result<Option<i64>, AppError>;

    /// Lists the most recently created links, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_recent(&self, limit: i64) -> Result<Vec<ShortLink>, AppError>;

    /// Counts all stored links.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;
}
