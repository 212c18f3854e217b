//! Click recording and aggregation service.

use std::sync::Arc;

use chrono::{Duration, Utc};

use crate::domain::entities::{ClickEvent, ClickSummary, NewClickEvent};
use crate::domain::repositories::ClickRepository;
use crate::error::AppError;

/// Length of the window counted as `weekly_clicks`.
pub const WEEKLY_WINDOW_DAYS: i64 = 7;

/// Maximum number of entries in `popular_browsers`.
pub const POPULAR_BROWSERS_LIMIT: i64 = 5;

/// Service behind the analytics endpoints.
///
/// The recorder knows nothing about which codes exist in the shortener:
/// any code can be tracked and an unknown code simply has no clicks.
pub struct AnalyticsService<R: ClickRepository> {
    repository: Arc<R>,
}

impl<R: ClickRepository> AnalyticsService<R> {
    /// Creates a new analytics service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Appends one click event.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn track(&self, click: NewClickEvent) -> Result<ClickEvent, AppError> {
        self.repository.record(click).await
    }

    /// Aggregates the click log for a short code.
    ///
    /// `weekly_clicks` counts clicks strictly newer than seven days ago.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn summary(&self, short_code: &str) -> Result<ClickSummary, AppError> {
        let week_ago = Utc::now() - Duration::days(WEEKLY_WINDOW_DAYS);

        let total_clicks = self.repository.count_clicks(short_code, None).await?;
        let weekly_clicks = self
            .repository
            .count_clicks(short_code, Some(week_ago))
            .await?;
        let popular_browsers = self
            .repository
            .top_user_agents(short_code, POPULAR_BROWSERS_LIMIT)
            .await?;

        Ok(ClickSummary {
            short_code: short_code.to_string(),
            total_clicks,
            // A click landing between the two counts must not push weekly past total.
            weekly_clicks: weekly_clicks.min(total_clicks),
            popular_browsers,
        })
    }

    /// Counts every recorded click.
    pub async fn count_all(&self) -> Result<i64, AppError> {
        self.repository.count_all().await
    }
}
