//! Customer dashboard: own requests, booking, and confirmation.

use super::error::{operation_failed, DashboardError};
use super::session::SessionContext;
use super::views::{RequestStats, StatusFilter};
use crate::profile::domain::Role;
use crate::request::{
    domain::{Actor, CleaningRequest, RequestId},
    ports::RequestRepository,
    services::{
        BookingService, CancelRequestCommand, ConfirmCompletionCommand, CreateRequestCommand,
        RejectCompletionCommand, WorkflowService,
    },
};
use mockable::Clock;
use std::sync::Arc;

/// Data contract for the customer view.
///
/// Customers see only their own requests, newest first; they can book new
/// cleanings, confirm or reject jobs awaiting their confirmation, and cancel
/// a request that has not been assigned yet.
pub struct CustomerDashboard<R, C>
where
    R: RequestRepository,
    C: Clock + Send + Sync,
{
    booking: BookingService<R, C>,
    workflow: WorkflowService<R, C>,
    actor: Actor,
}

// Manual impl: a derive would bound `R: Clone` and `C: Clone`.
impl<R, C> Clone for CustomerDashboard<R, C>
where
    R: RequestRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            booking: self.booking.clone(),
            workflow: self.workflow.clone(),
            actor: self.actor,
        }
    }
}

impl<R, C> CustomerDashboard<R, C>
where
    R: RequestRepository,
    C: Clock + Send + Sync,
{
    /// Builds the dashboard for a signed-in customer.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::RoleMismatch`] when the session does not
    /// belong to a customer.
    pub fn new(
        repository: Arc<R>,
        clock: Arc<C>,
        session: &SessionContext,
    ) -> Result<Self, DashboardError> {
        if session.role() != Role::Customer {
            return Err(DashboardError::RoleMismatch {
                expected: Role::Customer,
                actual: session.role(),
            });
        }
        Ok(Self {
            booking: BookingService::new(Arc::clone(&repository), Arc::clone(&clock)),
            workflow: WorkflowService::new(repository, clock),
            actor: session.actor(),
        })
    }

    /// Books a new cleaning request for this customer.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Forbidden`] when the command names another
    /// customer and [`DashboardError::OperationFailed`] when validation or
    /// persistence rejects the booking.
    pub async fn create_request(
        &self,
        command: CreateRequestCommand,
    ) -> Result<CleaningRequest, DashboardError> {
        if command.customer_id() != self.actor.profile_id() {
            return Err(DashboardError::Forbidden);
        }
        self.booking
            .create_request(command)
            .await
            .map_err(|err| operation_failed("create request", &err))
    }

    /// Returns this customer's requests, newest created first.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::OperationFailed`] when the store is
    /// unavailable.
    pub async fn my_requests(&self) -> Result<Vec<CleaningRequest>, DashboardError> {
        self.booking
            .list_for_customer(self.actor.profile_id())
            .await
            .map_err(|err| operation_failed("list own requests", &err))
    }

    /// Returns this customer's requests narrowed by a status tab.
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

    /// Returns the counters shown above the request list.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::OperationFailed`] when the store is
    /// unavailable.
    pub async fn stats(&self) -> Result<RequestStats, DashboardError> {
        Ok(RequestStats::from_requests(&self.my_requests().await?))
    }

    /// Confirms a job that is awaiting this customer's confirmation.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::OperationFailed`] when the request is not
    /// confirmable by this session or the store is unavailable.
    pub async fn confirm_completion(&self, request_id: RequestId) -> Result<(), DashboardError> {
        self.workflow
            .confirm_completion(self.actor, ConfirmCompletionCommand::new(request_id))
            .await
            .map(drop)
            .map_err(|err| operation_failed("confirm completion", &err))
    }

    /// Rejects a job that is awaiting this customer's confirmation.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::OperationFailed`] when the request is not
    /// rejectable by this session or the store is unavailable.
    pub async fn reject_completion(&self, request_id: RequestId) -> Result<(), DashboardError> {
        self.workflow
            .reject_completion(self.actor, RejectCompletionCommand::new(request_id))
            .await
            .map(drop)
            .map_err(|err| operation_failed("reject completion", &err))
    }

    /// Cancels one of this customer's pending requests.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::OperationFailed`] when the request is not
    /// cancellable by this session or the store is unavailable.
    pub async fn cancel_request(&self, request_id: RequestId) -> Result<(), DashboardError> {
        self.workflow
            .cancel(self.actor, CancelRequestCommand::new(request_id))
            .await
            .map(drop)
            .map_err(|err| operation_failed("cancel request", &err))
    }
}
