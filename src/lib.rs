//! Lustro: booking and dispatch core for a home-cleaning service.
//!
//! This crate provides the domain logic shared by the customer, employee,
//! and admin surfaces of a home-cleaning booking system: the cleaning
//! request lifecycle, employee assignment, price computation, and the
//! persistence gateway those surfaces read and mutate.
//!
//! # Architecture
//!
//! Lustro follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, in-memory)
//!
//! # Modules
//!
//! - [`profile`]: Identity records and role definitions
//! - [`request`]: Cleaning request lifecycle, pricing, and assignment
//! - [`dashboard`]: Role-scoped data contracts over the request store

pub mod dashboard;
pub mod profile;
pub mod request;
