//! Adapter implementations of the profile ports.

pub mod memory;
pub mod postgres;
