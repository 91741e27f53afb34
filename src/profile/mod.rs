//! Identity records for the booking system.
//!
//! Profiles are created at registration by the external identity provider
//! and carry the role that gates every workflow transition. This subsystem
//! reads profiles and never deletes them. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;
