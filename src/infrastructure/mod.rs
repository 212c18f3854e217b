//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete implementations for data persistence and collaborator calls.
//!
//! # Modules
//!
//! - [`collaborators`] - Analytics and notification service clients
//! - [`persistence`] - SQLite repository implementations

pub mod collaborators;
pub mod persistence;
