//! Port contracts for profile lookup.
//!
//! Ports define infrastructure-agnostic interfaces used by dashboards and
//! workflow services.

pub mod repository;

pub use repository::{ProfileRepository, ProfileRepositoryError, ProfileRepositoryResult};
