//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository calls,
//! validation, and business rules. Services consume repository traits and provide
//! a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Short link creation, lookup and click counter
//! - [`services::analytics_service::AnalyticsService`] - Click log and aggregation
//! - [`services::notification_service::NotificationService`] - Creation notification log

pub mod services;
