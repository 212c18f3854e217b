//! Core domain entities.
//!
//! # Entity Types
//!
//! - [`ShortLink`] - A short code to original URL mapping with its click counter
//! - [`ClickEvent`] - One recorded redirect, owned by the analytics service
//! - [`NotificationRecord`] - One creation notification, owned by the notification service
//!
//! # Design Pattern
//!
//! Separate structs are used for creation input:
//! - `NewLink`, `NewClickEvent`, `NewNotification`

pub mod click;
pub mod link;
pub mod notification;

pub use click::{BrowserCount, ClickEvent, ClickSummary, NewClickEvent};
pub use link::{LinkStats, NewLink, ShortLink};
pub use notification::{NewNotification, NotificationRecord, NotificationType};
