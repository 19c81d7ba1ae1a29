//! Shared types for Cipherpad.
//!
//! This crate contains pure data structures shared by every layer. Nothing
//! here carries business logic - these are building blocks passed between
//! the controller core and the application shell.
//!
//! ## Architecture
//!
//! - **common** (this crate): Pure shared types
//! - **client-core**: Controller and transport logic operating on them
//! - **cipherpad**: Application wiring everything together

pub mod error;
pub mod http_status;
pub mod redacted_password;

pub use error::error_location::ErrorLocation;
pub use error::redact_error::RedactError;
pub use http_status::HttpStatusCode;
pub use redacted_password::RedactedPassword;
