//! Employee dashboard: assigned jobs and completion marking.

use super::error::{operation_failed, DashboardError};
use super::session::SessionContext;
use super::views::{EmployeeRequestRow, RequestStats, StatusFilter};
use crate::profile::domain::{Profile, ProfileId, Role};
use crate::profile::ports::ProfileRepository;
use crate::request::{
    domain::{Actor, CleaningRequest, RequestId},
    ports::RequestRepository,
    services::{BookingService, MarkCompletedCommand, StartWorkCommand, WorkflowService},
};
use mockable::Clock;
use std::collections::HashMap;
use std::sync::Arc;

/// Data contract for the employee view.
///
/// Employees see only the requests assigned to them, soonest service date
/// first, each enriched with the owning customer so the crew knows who to
/// call. They can start an assigned job and mark it done.
pub struct EmployeeDashboard<R, P, C>
where
    R: RequestRepository,
    P: ProfileRepository,
    C: Clock + Send + Sync,
{
    booking: BookingService<R, C>,
    workflow: WorkflowService<R, C>,
    profiles: Arc<P>,
    actor: Actor,
}

// Manual impl: a derive would bound `R: Clone`, `P: Clone`, and `C: Clone`.
impl<R, P, C> Clone for EmployeeDashboard<R, P, C>
where
    R: RequestRepository,
    P: ProfileRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            booking: self.booking.clone(),
            workflow: self.workflow.clone(),
            profiles: Arc::clone(&self.profiles),
            actor: self.actor,
        }
    }
}

impl<R, P, C> EmployeeDashboard<R, P, C>
where
    R: RequestRepository,
    P: ProfileRepository,
    C: Clock + Send + Sync,
{
    /// Builds the dashboard for a signed-in employee.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::RoleMismatch`] when the session does not
    /// belong to an employee.
    pub fn new(
        repository: Arc<R>,
        profiles: Arc<P>,
        clock: Arc<C>,
        session: &SessionContext,
    ) -> Result<Self, DashboardError> {
        if session.role() != Role::Employee {
            return Err(DashboardError::RoleMismatch {
                expected: Role::Employee,
                actual: session.role(),
            });
        }
        Ok(Self {
            booking: BookingService::new(Arc::clone(&repository), Arc::clone(&clock)),
            workflow: WorkflowService::new(repository, clock),
            profiles,
            actor: session.actor(),
        })
    }

    /// Returns this employee's assigned requests with their customers,
    /// soonest service date first.
    ///
    /// Customer profiles are resolved with one batched lookup rather than a
    /// read per row.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::OperationFailed`] when the store is
    /// unavailable.
    pub async fn my_assignments(&self) -> Result<Vec<EmployeeRequestRow>, DashboardError> {
        let requests = self.my_requests().await?;

        let customer_ids: Vec<ProfileId> = requests
            .iter()
            .map(CleaningRequest::customer_id)
            .collect();
        let customers: HashMap<ProfileId, Profile> = self
            .profiles
            .find_by_ids(&customer_ids)
            .await
            .map_err(|err| operation_failed("resolve customers", &err))?
            .into_iter()
            .map(|profile| (profile.id(), profile))
            .collect();

        Ok(requests
            .into_iter()
            .map(|request| {
                let customer = customers.get(&request.customer_id()).cloned();
                EmployeeRequestRow { request, customer }
            })
            .collect())
    }

    /// Returns this employee's assigned requests narrowed by a status tab.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::OperationFailed`] when the store is
    /// unavailable.
    pub async fn filtered_requests(
        &self,
        filter: StatusFilter,
    ) -> Result<Vec<CleaningRequest>, DashboardError> {
        Ok(filter.apply(&self.my_requests().await?))
    }

    /// Returns the counters shown above the assignment list.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::OperationFailed`] when the store is
    /// unavailable.
    pub async fn stats(&self) -> Result<RequestStats, DashboardError> {
        Ok(RequestStats::from_requests(&self.my_requests().await?))
    }

    /// Starts an assigned job.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::OperationFailed`] when the job is not
    /// startable by this session or the store is unavailable.
    pub async fn start_work(&self, request_id: RequestId) -> Result<(), DashboardError> {
        self.workflow
            .start_work(self.actor, StartWorkCommand::new(request_id))
            .await
            .map(drop)
            .map_err(|err| operation_failed("start work", &err))
    }

    /// Marks a job done, handing it to the customer for confirmation.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::OperationFailed`] when the job is not
    /// markable by this session or the store is unavailable.
    pub async fn mark_completed(&self, request_id: RequestId) -> Result<(), DashboardError> {
        self.workflow
            .mark_completed(self.actor, MarkCompletedCommand::new(request_id))
            .await
            .map(drop)
            .map_err(|err| operation_failed("mark completed", &err))
    }

    async fn my_requests(&self) -> Result<Vec<CleaningRequest>, DashboardError> {
        self.booking
            .list_for_employee(self.actor.profile_id())
            .await
            .map_err(|err| operation_failed("list assignments", &err))
    }
}
