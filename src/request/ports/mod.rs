//! Port contracts for request lifecycle management.
//!
//! Ports define infrastructure-agnostic interfaces used by request services
//! and dashboards.

pub mod repository;

pub use repository::{RequestRepository, RequestRepositoryError, RequestRepositoryResult};
