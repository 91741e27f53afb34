//! View models and row filtering shared by the dashboards.

use crate::profile::domain::Profile;
use crate::request::domain::{CleaningRequest, RequestStatus};

/// Admin view row: a request enriched with the people involved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminRequestRow {
    /// The request itself.
    pub request: CleaningRequest,
    /// Owning customer profile, when it could be resolved.
    pub customer: Option<Profile>,
    /// Profiles of the currently assigned employees.
    pub assigned_employees: Vec<Profile>,
}

impl AdminRequestRow {
    /// Returns assignment progress as (assigned, requested).
    #[must_use]
    pub fn assignment_progress(&self) -> (usize, u8) {
        (
            self.assigned_employees.len(),
            self.request.employee_count().value(),
        )
    }
}

/// Employee view row: a request enriched with the owning customer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeRequestRow {
    /// The request itself.
    pub request: CleaningRequest,
    /// Owning customer profile, when it could be resolved.
    pub customer: Option<Profile>,
}

/// Counters the dashboards display above their request lists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestStats {
    /// All requests in the view.
    pub total: usize,
    /// Requests waiting for assignment.
    pub pending: usize,
    /// Requests assigned or in progress.
    pub active: usize,
    /// Requests waiting for customer confirmation.
    pub awaiting: usize,
    /// Finished requests.
    pub completed: usize,
}

impl RequestStats {
    /// Tallies stats over a slice of requests.
    #[must_use]
    pub fn from_requests(requests: &[CleaningRequest]) -> Self {
        let mut stats = Self {
            total: requests.len(),
            ..Self::default()
        };
        for request in requests {
            match request.status() {
                RequestStatus::Pending => stats.pending += 1,
                RequestStatus::Assigned | RequestStatus::InProgress => stats.active += 1,
                RequestStatus::AwaitingConfirmation => stats.awaiting += 1,
                RequestStatus::Completed => stats.completed += 1,
                RequestStatus::Cancelled => {}
            }
        }
        stats
    }
}

/// Row filter applied by the dashboard status tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    /// Exactly one status.
    Status(RequestStatus),
    /// Assigned or in-progress rows, grouped as one tab.
    Active,
}

impl StatusFilter {
    /// Returns whether the request passes the filter.
    #[must_use]
    pub fn matches(self, request: &CleaningRequest) -> bool {
        match self {
            Self::Status(status) => request.status() == status,
            Self::Active => request.status().is_active(),
        }
    }

    /// Keeps only the rows that pass the filter, preserving order.
    #[must_use]
    pub fn apply(self, requests: &[CleaningRequest]) -> Vec<CleaningRequest> {
        requests
            .iter()
            .filter(|request| self.matches(request))
            .cloned()
            .collect()
    }
}
