//! DTOs for the click analytics endpoint.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{BrowserCount, ClickSummary};

/// Aggregated clicks for one short code.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct AnalyticsResponse {
    pub short_code: String,
    pub total_clicks: i64,
    pub weekly_clicks: i64,
    pub popular_browsers: Vec<BrowserInfo>,
}

/// One `popular_browsers` entry.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct BrowserInfo {
    pub browser: String,
    pub count: i64,
}

impl From<BrowserCount> for BrowserInfo {
    fn from(b: BrowserCount) -> Self {
        Self {
            browser: b.browser,
            count: b.count,
        }
    }
}

impl From<ClickSummary> for AnalyticsResponse {
    fn from(summary: ClickSummary) -> Self {
        Self {
            short_code: summary.short_code,
            total_clicks: summary.total_clicks,
            weekly_clicks: summary.weekly_clicks,
            popular_browsers: summary
                .popular_browsers
                .into_iter()
                .map(BrowserInfo::from)
                .collect(),
        }
    }
}
