//! # Shortlink Services
//!
//! A URL shortener with two companion services, built with Axum and SQLite:
//!
//! - **Shortener** (`shortener` binary) - creates short codes, redirects and
//!   keeps a click counter per link
//! - **Analytics** (`analytics` binary) - append-only click log with
//!   aggregation queries
//! - **Notifier** (`notifier` binary) - append-only log of link creation
//!   notifications
//!
//! The shortener reports every redirect to the analytics service and every
//! new link to the notifier. Both calls are fire-and-forget: bounded by a
//! short timeout, never retried, and never able to fail the request that
//! triggered them. The analytics log can therefore lag behind the click
//! counter.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Core business entities and repository traits
//! - **Application Layer** ([`application`]) - Business logic and service orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite persistence and collaborator clients
//! - **API Layer** ([`api`]) - REST API handlers, DTOs, and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! cargo run --bin analytics &
//! cargo run --bin notifier &
//! ANALYTICS_SERVICE_URL=http://localhost:5001 \
//! NOTIFICATION_SERVICE_URL=http://localhost:5002 \
//! cargo run --bin shortener
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::{AnalyticsState, NotificationState, ShortenerState};

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{AnalyticsService, LinkService, NotificationService};
    pub use crate::domain::entities::{
        ClickEvent, ClickSummary, NewClickEvent, NewLink, NewNotification, NotificationRecord,
        NotificationType, ShortLink,
    };
    pub use crate::error::AppError;
    pub use crate::state::{AnalyticsState, NotificationState, ShortenerState};
}
