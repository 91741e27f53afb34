//! `PostgreSQL` adapters for request lifecycle persistence.

mod models;
mod repository;
mod schema;

pub use repository::{PostgresRequestRepository, RequestPgPool};
