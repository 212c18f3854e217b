//! Utility functions for code generation, URL processing, and request handling.
//!
//! - [`code_generator`] - Short code generation
//! - [`url_normalizer`] - URL validation and scheme completion
//! - [`request_info`] - Host, client IP and User-Agent extraction from headers

pub mod code_generator;
pub mod request_info;
pub mod url_normalizer;
