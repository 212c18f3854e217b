//! Domain layer containing business entities and repository contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures for all three services
//! - [`repositories`] - Data access trait definitions
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Repository traits define contracts implemented by infrastructure layer
//! - Business logic is encapsulated in services (see [`crate::application::services`])
//!
//! Services never share entities by value. A [`entities::ClickEvent`] or
//! [`entities::NotificationRecord`] refers to a link only through its short
//! code string.

pub mod entities;
pub mod repositories;
