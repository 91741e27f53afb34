//! Adapter implementations of the request ports.

pub mod memory;
pub mod postgres;
