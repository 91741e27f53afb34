//! Cleaning request lifecycle management.
//!
//! This module implements the heart of the booking system: creating priced
//! cleaning requests, assigning employees, and enforcing the role-gated
//! status workflow from `pending` through customer-confirmed `completed`.
//! The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
