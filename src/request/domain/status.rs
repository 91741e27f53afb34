//! Request status workflow graph.

use super::ParseRequestStatusError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a cleaning request.
///
/// The happy path runs `pending → assigned → in_progress →
/// awaiting_confirmation → completed`. Rejection by the customer is the one
/// backward edge (`awaiting_confirmation → assigned`); cancellation is a
/// status, not a deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    /// Created by a customer, no employees assigned yet.
    Pending,
    /// Admin has assigned the full employee set.
    Assigned,
    /// An assigned employee has started the job.
    InProgress,
    /// An employee marked the job done; customer confirmation outstanding.
    AwaitingConfirmation,
    /// The customer confirmed the job (or an admin force-completed it).
    Completed,
    /// The request was called off before the work finished.
    Cancelled,
}

impl RequestStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Assigned => "assigned",
            Self::InProgress => "in_progress",
            Self::AwaitingConfirmation => "awaiting_confirmation",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    /// Returns whether transition to `target` is allowed.
    ///
    /// The graph is actor-agnostic; role and precondition checks layer on
    /// top in [`super::CleaningRequest`].
    #[must_use]
    pub const fn can_transition_to(self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Pending, Self::Assigned | Self::Cancelled)
                | (
                    Self::Assigned,
                    Self::InProgress
                        | Self::AwaitingConfirmation
                        | Self::Completed
                        | Self::Cancelled
                )
                | (Self::InProgress, Self::AwaitingConfirmation)
                | (Self::AwaitingConfirmation, Self::Completed | Self::Assigned)
        )
    }

    /// Returns whether this status admits no further transitions.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }

    /// Returns whether the request counts as actively being worked.
    ///
    /// The dashboards group `assigned` and `in_progress` rows together as
    /// "active".
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Assigned | Self::InProgress)
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl TryFrom<&str> for RequestStatus {
    type Error = ParseRequestStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "pending" => Ok(Self::Pending),
            "assigned" => Ok(Self::Assigned),
            "in_progress" => Ok(Self::InProgress),
            "awaiting_confirmation" => Ok(Self::AwaitingConfirmation),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(ParseRequestStatusError(value.to_owned())),
        }
    }
}
