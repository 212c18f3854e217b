//! Click event entity owned by the analytics service.

use chrono::{DateTime, Utc};

/// Stored in place of a missing `User-Agent` header.
pub const UNKNOWN_USER_AGENT: &str = "Unknown";

/// Stored in place of an unresolvable client address.
pub const UNKNOWN_IP: &str = "unknown";

/// A single redirect recorded by the analytics service.
///
/// Click events are append-only; their insertion order is their
/// chronological order. `short_code` is a reference to the shortener's link
/// and is not checked against it.
#[derive(Debug, Clone, PartialEq)]
pub struct ClickEvent {
    pub id: i64,
    pub short_code: String,
    pub click_time: DateTime<Utc>,
    pub user_agent: String,
    pub ip_address: String,
}

/// Input data for recording a click.
#[derive(Debug, Clone)]
pub struct NewClickEvent {
    pub short_code: String,
    pub user_agent: String,
    pub ip_address: String,
}

impl NewClickEvent {
    /// Builds a click from request metadata, filling in placeholders for
    /// missing or blank values.
    pub fn new(short_code: String, user_agent: Option<&str>, ip_address: Option<String>) -> Self {
        let user_agent = user_agent
            .map(str::trim)
            .filter(|ua| !ua.is_empty())
            .unwrap_or(UNKNOWN_USER_AGENT)
            .to_string();

        Self {
            short_code,
            user_agent,
            ip_address: ip_address.unwrap_or_else(|| UNKNOWN_IP.to_string()),
        }
    }
}

/// Number of clicks for one user agent string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserCount {
    pub browser: String,
    pub count: i64,
}

/// Aggregated analytics for one short code.
///
/// `weekly_clicks <= total_clicks` and `popular_browsers` holds at most five
/// entries sorted by count, descending, with ties in first-seen order.
#[derive(Debug, Clone, PartialEq)]
pub struct ClickSummary {
    pub short_code: String,
    pub total_clicks: i64,
    pub weekly_clicks: i64,
    pub popular_browsers: Vec<BrowserCount>,
}
