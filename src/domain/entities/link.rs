//! Short link entity owned by the shortener service.

use chrono::{DateTime, Utc};

/// A short code mapped to its original URL.
///
/// `short_code` is unique across the store and `click_count` only ever grows.
/// Links are never deleted.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortLink {
    pub id: i64,
    pub original_url: String,
    pub short_code: String,
    pub created_at: DateTime<Utc>,
    pub click_count: i64,
}

impl ShortLink {
    /// Creates a new ShortLink instance.
    pub fn new(
        id: i64,
        original_url: String,
        short_code: String,
        created_at: DateTime<Utc>,
        click_count: i64,
    ) -> Self {
        Self {
            id,
            original_url,
            short_code,
            created_at,
            click_count,
        }
    }
}

/// Input data for creating a new link.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub short_code: String,
    pub original_url: String,
}

/// Counter snapshot returned by the stats lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkStats {
    pub short_code: String,
    pub original_url: String,
    pub click_count: i64,
    pub created_at: DateTime<Utc>,
}

impl From<ShortLink> for LinkStats {
    fn from(link: ShortLink) -> Self {
        Self {
            short_code: link.short_code,
            original_url: link.original_url,
            click_count: link.click_count,
            created_at: link.created_at,
        }
    }
}
