//! Dashboard boundary error type.

use crate::profile::domain::Role;
use std::fmt;
use thiserror::Error;

/// Errors surfaced by dashboard operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DashboardError {
    /// The signed-in profile's role does not match the dashboard.
    #[error("expected a {expected} session, got {actual}")]
    RoleMismatch {
        /// Role the dashboard serves.
        expected: Role,
        /// Role of the signed-in profile.
        actual: Role,
    },

    /// The operation targeted data the session may not touch.
    #[error("operation not permitted for this session")]
    Forbidden,

    /// The operation could not be completed.
    ///
    /// Deliberately carries no detail: the underlying failure has already
    /// been logged, and the end user only ever sees a generic message.
    #[error("the operation could not be completed")]
    OperationFailed,
}

/// Logs a failure at the boundary and collapses it to the generic error.
pub(crate) fn operation_failed(context: &'static str, err: &dyn fmt::Display) -> DashboardError {
    tracing::warn!(error = %err, context, "dashboard operation failed");
    DashboardError::OperationFailed
}
