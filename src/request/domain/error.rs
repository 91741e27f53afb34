//! Error types for request domain validation and workflow enforcement.

use super::{RequestId, RequestStatus};
use crate::profile::domain::Role;
use thiserror::Error;

/// Errors returned while constructing or transitioning domain request values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RequestDomainError {
    /// A required location field is blank.
    #[error("location field '{field}' must not be empty")]
    EmptyLocationField {
        /// Name of the offending field.
        field: &'static str,
    },

    /// The employee count is outside the supported range.
    #[error("invalid employee count {0}, expected 1 to 5")]
    InvalidEmployeeCount(u8),

    /// The requested status move is not in the workflow graph.
    #[error("invalid status transition for request {request_id}: {from} -> {to}")]
    InvalidStatusTransition {
        /// Request being transitioned.
        request_id: RequestId,
        /// Current status.
        from: RequestStatus,
        /// Requested status.
        to: RequestStatus,
    },

    /// The acting role may not perform this workflow action.
    #[error("role {role} may not {action} request {request_id}")]
    RoleNotPermitted {
        /// Request being acted on.
        request_id: RequestId,
        /// Role of the actor.
        role: Role,
        /// Attempted action.
        action: &'static str,
    },

    /// The acting customer does not own the request.
    #[error("actor is not the owning customer of request {request_id}")]
    NotRequestOwner {
        /// Request being acted on.
        request_id: RequestId,
    },

    /// The acting employee is not in the request's assignment set.
    #[error("actor is not an assigned employee of request {request_id}")]
    NotAssignedEmployee {
        /// Request being acted on.
        request_id: RequestId,
    },

    /// The selected employee set does not match the requested headcount.
    #[error(
        "assignment count mismatch for request {request_id}: expected {expected}, got {actual}"
    )]
    AssignmentCountMismatch {
        /// Request being assigned.
        request_id: RequestId,
        /// Headcount the customer requested.
        expected: u8,
        /// Number of employees selected.
        actual: usize,
    },

    /// The same employee appears more than once in an assignment set.
    #[error("duplicate employee in assignment set for request {request_id}")]
    DuplicateAssignedEmployee {
        /// Request being assigned.
        request_id: RequestId,
    },

    /// Admin force-completion is disabled under the strict policy.
    #[error("force-complete is disabled by the strict completion policy (request {request_id})")]
    ForceCompleteDisabled {
        /// Request being force-completed.
        request_id: RequestId,
    },
}

/// Error returned while parsing request statuses from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown request status: {0}")]
pub struct ParseRequestStatusError(pub String);

/// Error returned while parsing home sizes from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown home size: {0}")]
pub struct ParseHomeSizeError(pub String);
