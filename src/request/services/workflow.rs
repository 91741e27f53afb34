//! Service layer for role-gated workflow transitions and assignment.

use crate::profile::domain::ProfileId;
use crate::request::{
    domain::{
        Actor, AdminCompletionPolicy, CleaningRequest, RequestDomainError, RequestId,
    },
    ports::{RequestRepository, RequestRepositoryError},
};
use mockable::Clock;
use std::collections::HashSet;
use std::sync::Arc;
use thiserror::Error;

/// Command to replace a request's assignment set and advance it to
/// `assigned`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignEmployeesCommand {
    request_id: RequestId,
    employee_ids: Vec<ProfileId>,
}

impl AssignEmployeesCommand {
    /// Creates an assignment command.
    #[must_use]
    pub const fn new(request_id: RequestId, employee_ids: Vec<ProfileId>) -> Self {
        Self {
            request_id,
            employee_ids,
        }
    }

    /// Returns the target request.
    #[must_use]
    pub const fn request_id(&self) -> RequestId {
        self.request_id
    }

    /// Returns the selected employees.
    #[must_use]
    pub fn employee_ids(&self) -> &[ProfileId] {
        &self.employee_ids
    }
}

macro_rules! request_command {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct $name {
            request_id: RequestId,
        }

        impl $name {
            /// Creates the command for the given request.
            #[must_use]
            pub const fn new(request_id: RequestId) -> Self {
                Self { request_id }
            }

            /// Returns the target request.
            #[must_use]
            pub const fn request_id(&self) -> RequestId {
                self.request_id
            }
        }
    };
}

request_command! {
    /// Command for an assigned employee to start the job.
    StartWorkCommand
}
request_command! {
    /// Command for an assigned employee to mark the job done.
    MarkCompletedCommand
}
request_command! {
    /// Command for the owning customer to confirm a marked-complete job.
    ConfirmCompletionCommand
}
request_command! {
    /// Command for the owning customer to reject a marked-complete job.
    RejectCompletionCommand
}
request_command! {
    /// Command for an admin to complete an assigned request directly.
    ForceCompleteCommand
}
request_command! {
    /// Command to cancel a request before work finishes.
    CancelRequestCommand
}

/// Service-level errors for workflow operations.
#[derive(Debug, Error)]
pub enum WorkflowError {
    /// Domain validation or gating failed.
    #[error(transparent)]
    Domain(#[from] RequestDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] RequestRepositoryError),
}

/// Result type for workflow service operations.
pub type WorkflowResult<T> = Result<T, WorkflowError>;

/// Workflow orchestration service.
///
/// Loads the aggregate, applies the role-gated domain transition, and
/// persists the result. The service never mutates storage when the domain
/// rejects a move.
pub struct WorkflowService<R, C>
where
    R: RequestRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    policy: AdminCompletionPolicy,
    clock: Arc<C>,
}

// Manual impl: a derive would bound `R: Clone` and `C: Clone`, but only the
// `Arc` handles need cloning.
impl<R, C> Clone for WorkflowService<R, C>
where
    R: RequestRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            policy: self.policy,
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<R, C> WorkflowService<R, C>
where
    R: RequestRepository,
    C: Clock + Send + Sync,
{
    /// Creates a workflow service with the default (shortcut) completion
    /// policy.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self {
            repository,
            policy: AdminCompletionPolicy::Shortcut,
            clock,
        }
    }

    /// Overrides the admin completion policy.
    #[must_use]
    pub const fn with_policy(mut self, policy: AdminCompletionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Returns the configured admin completion policy.
    #[must_use]
    pub const fn policy(&self) -> AdminCompletionPolicy {
        self.policy
    }

    /// Replaces the assignment set and advances the request to `assigned`.
    ///
    /// The selected set must be duplicate-free and its size must equal the
    /// requested crew size; otherwise nothing is persisted.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError::Domain`] when the actor or selection is
    /// rejected and [`WorkflowError::Repository`] when the request is
    /// unknown or persistence fails.
    pub async fn assign_employees(
        &self,
        actor: Actor,
        command: AssignEmployeesCommand,
    ) -> WorkflowResult<CleaningRequest> {
        let mut request = self.load(command.request_id()).await?;

        let unique: HashSet<ProfileId> = command.employee_ids().iter().copied().collect();
        if unique.len() != command.employee_ids().len() {
            return Err(RequestDomainError::DuplicateAssignedEmployee {
                request_id: request.id(),
            }
            .into());
        }

        request.assign(actor, command.employee_ids().len(), &*self.clock)?;
        self.repository
            .assign_employees(&request, command.employee_ids())
            .await?;
        Ok(request)
    }

    /// Moves an assigned request to `in_progress`.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError::Domain`] when the actor is not an assigned
    /// employee or the move is illegal, and [`WorkflowError::Repository`]
    /// when the request is unknown or persistence fails.
    pub async fn start_work(
        &self,
        actor: Actor,
        command: StartWorkCommand,
    ) -> WorkflowResult<CleaningRequest> {
        let mut request = self.load(command.request_id()).await?;
        let assigned = self.repository.assigned_employees(request.id()).await?;
        request.start_work(actor, &assigned, &*self.clock)?;
        self.repository.update(&request).await?;
        Ok(request)
    }

    /// Marks the job done and hands it to the customer for confirmation.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError::Domain`] when the actor is not an assigned
    /// employee or the move is illegal, and [`WorkflowError::Repository`]
    /// when the request is unknown or persistence fails.
    pub async fn mark_completed(
        &self,
        actor: Actor,
        command: MarkCompletedCommand,
    ) -> WorkflowResult<CleaningRequest> {
        let mut request = self.load(command.request_id()).await?;
        let assigned = self.repository.assigned_employees(request.id()).await?;
        request.mark_completed(actor, &assigned, &*self.clock)?;
        self.repository.update(&request).await?;
        Ok(request)
    }

    /// Confirms a marked-complete job, finishing the workflow.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError::Domain`] when the actor is not the owning
    /// customer or the move is illegal, and [`WorkflowError::Repository`]
    /// when the request is unknown or persistence fails.
    pub async fn confirm_completion(
        &self,
        actor: Actor,
        command: ConfirmCompletionCommand,
    ) -> WorkflowResult<CleaningRequest> {
        let mut request = self.load(command.request_id()).await?;
        request.confirm_completion(actor, &*self.clock)?;
        self.repository.update(&request).await?;
        Ok(request)
    }

    /// Rejects a marked-complete job, reverting it to `assigned`.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError::Domain`] when the actor is not the owning
    /// customer or the move is illegal, and [`WorkflowError::Repository`]
    /// when the request is unknown or persistence fails.
    pub async fn reject_completion(
        &self,
        actor: Actor,
        command: RejectCompletionCommand,
    ) -> WorkflowResult<CleaningRequest> {
        let mut request = self.load(command.request_id()).await?;
        request.reject_completion(actor, &*self.clock)?;
        self.repository.update(&request).await?;
        Ok(request)
    }

    /// Completes an assigned request directly under the shortcut policy.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError::Domain`] when the actor is not an admin,
    /// the policy is strict, or the move is illegal, and
    /// [`WorkflowError::Repository`] when the request is unknown or
    /// persistence fails.
    pub async fn force_complete(
        &self,
        actor: Actor,
        command: ForceCompleteCommand,
    ) -> WorkflowResult<CleaningRequest> {
        let mut request = self.load(command.request_id()).await?;
        request.force_complete(actor, self.policy, &*self.clock)?;
        self.repository.update(&request).await?;
        Ok(request)
    }

    /// Cancels a request before work finishes.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError::Domain`] when the actor may not cancel or
    /// the move is illegal, and [`WorkflowError::Repository`] when the
    /// request is unknown or persistence fails.
    pub async fn cancel(
        &self,
        actor: Actor,
        command: CancelRequestCommand,
    ) -> WorkflowResult<CleaningRequest> {
        let mut request = self.load(command.request_id()).await?;
        request.cancel(actor, &*self.clock)?;
        self.repository.update(&request).await?;
        Ok(request)
    }

    async fn load(&self, request_id: RequestId) -> WorkflowResult<CleaningRequest> {
        self.repository
            .find_by_id(request_id)
            .await?
            .ok_or_else(|| RequestRepositoryError::NotFound(request_id).into())
    }
}
