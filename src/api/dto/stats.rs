//! DTOs for link statistics endpoint.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::analytics::AnalyticsResponse;
use crate::domain::entities::LinkStats;

/// Counter snapshot for a short link with the analytics service's view
/// embedded.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub short_code: String,
    pub original_url: String,
    pub click_count: i64,
    pub created_at: DateTime<Utc>,
    pub analytics: AnalyticsField,
}

/// Embedded analytics, or `{}` when the analytics service could not be
/// reached in time.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum AnalyticsField {
    Available(AnalyticsResponse),
    Unavailable {},
}

impl StatsResponse {
    pub fn new(stats: LinkStats, analytics: AnalyticsField) -> Self {
        Self {
            short_code: stats.short_code,
            original_url: stats.original_url,
            click_count: stats.click_count,
            created_at: stats.created_at,
            analytics,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_analytics_is_empty_object() {
        let stats = LinkStats {
            short_code: "abc123".to_string(),
            original_url: "https://example.com".to_string(),
            click_count: 2,
            created_at: Utc::now(),
        };

        let value = serde_json::to_value(StatsResponse::new(stats, AnalyticsField::Unavailable {}))
            .unwrap();

        assert_eq!(value["analytics"], serde_json::json!({}));
        assert_eq!(value["click_count"], 2);
    }
}
