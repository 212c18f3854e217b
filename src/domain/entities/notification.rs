//! Notification record entity owned by the notification service.

use chrono::{DateTime, Utc};
use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Kind of event a notification describes.
///
/// Only `url_created` is emitted by the shortener. Other type strings sent by
/// clients are kept verbatim in [`NotificationType::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Default, SerializeDisplay, DeserializeFromStr)]
pub enum NotificationType {
    #[default]
    UrlCreated,
    Other(String),
}

impl NotificationType {
    pub fn as_str(&self) -> &str {
        match self {
            NotificationType::UrlCreated => "url_created",
            NotificationType::Other(kind) => kind,
        }
    }
}

impl fmt::Display for NotificationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for NotificationType {
    fn from(kind: String) -> Self {
        match kind.as_str() {
            "url_created" => NotificationType::UrlCreated,
            _ => NotificationType::Other(kind),
        }
    }
}

impl FromStr for NotificationType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(NotificationType::from(s.to_string()))
    }
}

/// A notification written by the notification service.
///
/// `sent` records only that the notification was written; delivery is not
/// modelled, so it is always `true` for records created by the service.
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationRecord {
    pub id: i64,
    pub short_code: String,
    pub original_url: String,
    pub notification_type: NotificationType,
    pub created_at: DateTime<Utc>,
    pub sent: bool,
}

/// Input data for appending a notification.
#[derive(Debug, Clone)]
pub struct NewNotification {
    pub short_code: String,
    pub original_url: String,
    pub notification_type: NotificationType,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_type_parse() {
        assert_eq!(
            "url_created".parse::<NotificationType>().unwrap(),
            NotificationType::UrlCreated
        );
        assert_eq!(
            "url_visited".parse::<NotificationType>().unwrap(),
            NotificationType::Other("url_visited".to_string())
        );
    }

    #[test]
    fn test_notification_type_default() {
        assert_eq!(NotificationType::default().as_str(), "url_created");
    }

    #[test]
    fn test_notification_type_serde() {
        let json = serde_json::to_string(&NotificationType::UrlCreated).unwrap();
        assert_eq!(json, "\"url_created\"");

        let parsed: NotificationType = serde_json::from_str("\"custom_event\"").unwrap();
        assert_eq!(parsed, NotificationType::Other("custom_event".to_string()));
    }
}
