//! Admin dashboard: the full request list, assignment, and dispatch.

use super::error::{operation_failed, DashboardError};
use super::session::SessionContext;
use super::views::{AdminRequestRow, RequestStats, StatusFilter};
use crate::profile::domain::{Profile, ProfileId, Role};
use crate::profile::ports::ProfileRepository;
use crate::request::{
    domain::{Actor, AdminCompletionPolicy, CleaningRequest, RequestId},
    ports::RequestRepository,
    services::{
        AssignEmployeesCommand, BookingService, CancelRequestCommand, ForceCompleteCommand,
        WorkflowService,
    },
};
use mockable::Clock;
use std::collections::HashMap;
use std::sync::Arc;

/// Data contract for the admin view.
///
/// Admins see every request, newest first, enriched with the customer and
/// the assigned crew. They dispatch pending requests to employees, may
/// force-complete assigned work under the shortcut policy, and may cancel
/// requests that have not started.
pub struct AdminDashboard<R, P, C>
where
    R: RequestRepository,
    P: ProfileRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    booking: BookingService<R, C>,
    workflow: WorkflowService<R, C>,
    profiles: Arc<P>,
    actor: Actor,
}

// Manual impl: a derive would bound `R: Clone`, `P: Clone`, and `C: Clone`.
impl<R, P, C> Clone for AdminDashboard<R, P, C>
where
    R: RequestRepository,
    P: ProfileRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            booking: self.booking.clone(),
            workflow: self.workflow.clone(),
            profiles: Arc::clone(&self.profiles),
            actor: self.actor,
        }
    }
}

impl<R, P, C> AdminDashboard<R, P, C>
where
    R: RequestRepository,
    P: ProfileRepository,
    C: Clock + Send + Sync,
{
    /// Builds the dashboard for a signed-in admin with the default
    /// (shortcut) completion policy.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::RoleMismatch`] when the session does not
    /// belong to an admin.
    pub fn new(
        repository: Arc<R>,
        profiles: Arc<P>,
        clock: Arc<C>,
        session: &SessionContext,
    ) -> Result<Self, DashboardError> {
        if session.role() != Role::Admin {
            return Err(DashboardError::RoleMismatch {
                expected: Role::Admin,
                actual: session.role(),
            });
        }
        Ok(Self {
            repository: Arc::clone(&repository),
            booking: BookingService::new(Arc::clone(&repository), Arc::clone(&clock)),
            workflow: WorkflowService::new(repository, clock),
            profiles,
            actor: session.actor(),
        })
    }

    /// Overrides the admin completion policy.
    #[must_use]
    pub fn with_policy(mut self, policy: AdminCompletionPolicy) -> Self {
        self.workflow = self.workflow.with_policy(policy);
        self
    }

    /// Returns every request enriched with the people involved, newest
    /// created first.
    ///
    /// Assignment pairs and all profiles are resolved with one batched read
    /// each rather than a pair of reads per row.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::OperationFailed`] when the store is
    /// unavailable.
    pub async fn list_requests(&self) -> Result<Vec<AdminRequestRow>, DashboardError> {
        let requests = self.all_requests().await?;
        let request_ids: Vec<RequestId> = requests.iter().map(CleaningRequest::id).collect();

        let pairs = self
            .repository
            .list_assignments(&request_ids)
            .await
            .map_err(|err| operation_failed("list assignments", &err))?;

        let mut assigned_by_request: HashMap<RequestId, Vec<ProfileId>> = HashMap::new();
        for pair in &pairs {
            assigned_by_request
                .entry(pair.request_id)
                .or_default()
                .push(pair.employee_id);
        }

        let mut profile_ids: Vec<ProfileId> = requests
            .iter()
            .map(CleaningRequest::customer_id)
            .chain(pairs.iter().map(|pair| pair.employee_id))
            .collect();
        profile_ids.sort_unstable_by_key(|id| id.into_inner());
        profile_ids.dedup();

        let people: HashMap<ProfileId, Profile> = self
            .profiles
            .find_by_ids(&profile_ids)
            .await
            .map_err(|err| operation_failed("resolve profiles", &err))?
            .into_iter()
            .map(|profile| (profile.id(), profile))
            .collect();

        Ok(requests
            .into_iter()
            .map(|request| {
                let customer = people.get(&request.customer_id()).cloned();
                let assigned_employees = assigned_by_request
                    .get(&request.id())
                    .map(|ids| {
                        ids.iter()
                            .filter_map(|id| people.get(id).cloned())
                            .collect()
                    })
                    .unwrap_or_default();
                AdminRequestRow {
                    request,
                    customer,
                    assigned_employees,
                }
            })
            .collect())
    }

    /// Returns all profiles available for assignment.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::OperationFailed`] when the store is
    /// unavailable.
    pub async fn list_employees(&self) -> Result<Vec<Profile>, DashboardError> {
        self.profiles
            .list_employees()
            .await
            .map_err(|err| operation_failed("list employees", &err))
    }

    /// Returns every request narrowed by a status tab.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::OperationFailed`] when the store is
    /// unavailable.
    pub async fn filtered_requests(
        &self,
        filter: StatusFilter,
    ) -> Result<Vec<CleaningRequest>, DashboardError> {
        Ok(filter.apply(&self.all_requests().await?))
    }

    /// Returns the counters shown above the request table.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::OperationFailed`] when the store is
    /// unavailable.
    pub async fn stats(&self) -> Result<RequestStats, DashboardError> {
        Ok(RequestStats::from_requests(&self.all_requests().await?))
    }

    /// Assigns a crew to a pending request.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::OperationFailed`] when the selection does
    /// not match the requested crew size, the request is not pending, or
    /// the store is unavailable.
    pub async fn assign_employees(
        &self,
        request_id: RequestId,
        employee_ids: Vec<ProfileId>,
    ) -> Result<(), DashboardError> {
        self.workflow
            .assign_employees(
                self.actor,
                AssignEmployeesCommand::new(request_id, employee_ids),
            )
            .await
            .map(drop)
            .map_err(|err| operation_failed("assign employees", &err))
    }

    /// Completes an assigned request directly, bypassing confirmation.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::OperationFailed`] when the policy is
    /// strict, the request is not assigned, or the store is unavailable.
    pub async fn force_complete(&self, request_id: RequestId) -> Result<(), DashboardError> {
        self.workflow
            .force_complete(self.actor, ForceCompleteCommand::new(request_id))
            .await
            .map(drop)
            .map_err(|err| operation_failed("force complete", &err))
    }

    /// Cancels a request that has not started.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::OperationFailed`] when the request has
    /// already started or finished, or the store is unavailable.
    pub async fn cancel_request(&self, request_id: RequestId) -> Result<(), DashboardError> {
        self.workflow
            .cancel(self.actor, CancelRequestCommand::new(request_id))
            .await
            .map(drop)
            .map_err(|err| operation_failed("cancel request", &err))
    }

    async fn all_requests(&self) -> Result<Vec<CleaningRequest>, DashboardError> {
        self.booking
            .list_all()
            .await
            .map_err(|err| operation_failed("list requests", &err))
    }
}
