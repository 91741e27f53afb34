//! Error types for profile domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain profile values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProfileDomainError {
    /// The email address is empty or lacks an `@` separator.
    #[error("invalid email address: {0}")]
    InvalidEmail(String),

    /// The full name is empty after trimming.
    #[error("full name must not be empty")]
    EmptyFullName,
}

/// Error returned while parsing roles from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown role: {0}")]
pub struct ParseRoleError(pub String);
