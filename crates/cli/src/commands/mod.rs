//! CLI command implementations.

pub mod job;
pub mod summary;
pub mod user;
