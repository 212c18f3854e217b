//! Repository trait definitions for the domain layer.
//!
//! These traits abstract data access following the Repository pattern and are
//! implemented by the SQLite repositories in `crate::infrastructure::persistence`.
//! Mock implementations are generated via `mockall` for unit tests.
//!
//! # Available Repositories
//!
//! - [`LinkRepository`] - Short link storage and click counters
//! - [`ClickRepository`] - Append-only click log and aggregations
//! - [`NotificationRepository`] - Append-only notification log
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod click_repository;
pub mod link_repository;
pub mod notification_repository;

pub use click_repository::ClickRepository;
pub use link_repository::LinkRepository;
pub use notification_repository::NotificationRepository;

#[cfg(test)]
pub use click_repository::MockClickRepository;
#[cfg(test)]
pub use link_repository::MockLinkRepository;
#[cfg(test)]
pub use notification_repository::MockNotificationRepository;
