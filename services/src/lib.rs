//! Assignment and submission lifecycle on top of the `db` models.
//!
//! Handlers in the API crate call these services and never touch the entities
//! directly. Every function takes the shared connection explicitly.

pub mod assignment_service;
pub mod error;
pub mod submission_service;
pub mod templates;
pub mod user_service;

pub use error::ServiceError;
