//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod analytics;
pub mod health;
pub mod notify;
pub mod redirect;
pub mod shorten;
pub mod stats;
pub mod track;

pub use analytics::analytics_handler;
pub use health::{analytics_health_handler, notification_health_handler, shortener_health_handler};
pub use notify::{notifications_handler, notify_handler};
pub use redirect::redirect_handler;
pub use shorten::shorten_handler;
pub use stats::stats_handler;
pub use track::track_handler;
