//! Cleaning request aggregate root and workflow enforcement.

use super::{
    quote, Actor, EmployeeCount, HomeSize, Price, RequestDomainError, RequestId, RequestStatus,
    ServiceLocation, ServiceSlot,
};
use crate::profile::domain::{ProfileId, Role};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// How admins may complete requests that never went through the
/// employee/customer confirmation loop.
///
/// Both policies exist in the wild: the admin dashboard historically offered
/// a direct `assigned → completed` shortcut, while the rest of the workflow
/// funnels through `awaiting_confirmation`. The choice is explicit rather
/// than silently merged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdminCompletionPolicy {
    /// Admins may force-complete an assigned request directly.
    #[default]
    Shortcut,
    /// Completion always requires the confirmation loop.
    Strict,
}

/// Association of one employee to one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequestAssignment {
    /// Assigned request.
    pub request_id: RequestId,
    /// Assigned employee.
    pub employee_id: ProfileId,
}

/// Parameter object for creating a new cleaning request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRequestData {
    /// Owning customer; immutable for the request's lifetime.
    pub customer_id: ProfileId,
    /// Where the cleaning takes place.
    pub location: ServiceLocation,
    /// Requested date and time of day.
    pub slot: ServiceSlot,
    /// Size class of the home.
    pub home_size: HomeSize,
    /// Requested crew size.
    pub employee_count: EmployeeCount,
    /// Optional free-text notes.
    pub special_notes: Option<String>,
}

/// Parameter object for reconstructing a persisted request aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedRequestData {
    /// Persisted request identifier.
    pub id: RequestId,
    /// Persisted owning customer.
    pub customer_id: ProfileId,
    /// Persisted location.
    pub location: ServiceLocation,
    /// Persisted scheduling slot.
    pub slot: ServiceSlot,
    /// Persisted home size.
    pub home_size: HomeSize,
    /// Persisted crew size.
    pub employee_count: EmployeeCount,
    /// Persisted notes, if any.
    pub special_notes: Option<String>,
    /// Persisted lifecycle status.
    pub status: RequestStatus,
    /// Persisted price.
    pub price: Price,
    /// Persisted employee-completion timestamp, if any.
    pub completed_at: Option<DateTime<Utc>>,
    /// Persisted customer-confirmation timestamp, if any.
    pub confirmed_at: Option<DateTime<Utc>>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Cleaning request aggregate root.
///
/// The price is computed once at creation from home size and crew size and
/// never recomputed. Status moves only along the workflow graph of
/// [`RequestStatus::can_transition_to`], with role and ownership checks
/// layered in the transition methods below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleaningRequest {
    id: RequestId,
    customer_id: ProfileId,
    location: ServiceLocation,
    slot: ServiceSlot,
    home_size: HomeSize,
    employee_count: EmployeeCount,
    special_notes: Option<String>,
    status: RequestStatus,
    price: Price,
    completed_at: Option<DateTime<Utc>>,
    confirmed_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl CleaningRequest {
    /// Creates a new pending request with its price fixed from the quote.
    #[must_use]
    pub fn create(data: NewRequestData, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        let price = quote(data.home_size, data.employee_count);

        Self {
            id: RequestId::new(),
            customer_id: data.customer_id,
            location: data.location,
            slot: data.slot,
            home_size: data.home_size,
            employee_count: data.employee_count,
            special_notes: data.special_notes,
            status: RequestStatus::Pending,
            price,
            completed_at: None,
            confirmed_at: None,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a request from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedRequestData) -> Self {
        Self {
            id: data.id,
            customer_id: data.customer_id,
            location: data.location,
            slot: data.slot,
            home_size: data.home_size,
            employee_count: data.employee_count,
            special_notes: data.special_notes,
            status: data.status,
            price: data.price,
            completed_at: data.completed_at,
            confirmed_at: data.confirmed_at,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the request identifier.
    #[must_use]
    pub const fn id(&self) -> RequestId {
        self.id
    }

    /// Returns the owning customer.
    #[must_use]
    pub const fn customer_id(&self) -> ProfileId {
        self.customer_id
    }

    /// Returns the service location.
    #[must_use]
    pub const fn location(&self) -> &ServiceLocation {
        &self.location
    }

    /// Returns the requested scheduling slot.
    #[must_use]
    pub const fn slot(&self) -> ServiceSlot {
        self.slot
    }

    /// Returns the home size class.
    #[must_use]
    pub const fn home_size(&self) -> HomeSize {
        self.home_size
    }

    /// Returns the requested crew size.
    #[must_use]
    pub const fn employee_count(&self) -> EmployeeCount {
        self.employee_count
    }

    /// Returns the optional free-text notes.
    #[must_use]
    pub fn special_notes(&self) -> Option<&str> {
        self.special_notes.as_deref()
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> RequestStatus {
        self.status
    }

    /// Returns the price fixed at creation.
    #[must_use]
    pub const fn price(&self) -> Price {
        self.price
    }

    /// Returns when an employee marked the job done, if they have.
    #[must_use]
    pub const fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Returns when the customer confirmed completion, if they have.
    #[must_use]
    pub const fn confirmed_at(&self) -> Option<DateTime<Utc>> {
        self.confirmed_at
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest mutation timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Moves the request to `assigned` once an admin has selected a crew.
    ///
    /// # Errors
    ///
    /// Returns [`RequestDomainError::RoleNotPermitted`] for non-admin
    /// actors, [`RequestDomainError::InvalidStatusTransition`] outside
    /// `pending`, and [`RequestDomainError::AssignmentCountMismatch`] when
    /// the selected crew does not match the requested headcount exactly.
    pub fn assign(
        &mut self,
        actor: Actor,
        selected_count: usize,
        clock: &impl Clock,
    ) -> Result<(), RequestDomainError> {
        self.require_role(actor, Role::Admin, "assign")?;
        self.guard_transition(RequestStatus::Assigned)?;
        if selected_count != usize::from(self.employee_count.value()) {
            return Err(RequestDomainError::AssignmentCountMismatch {
                request_id: self.id,
                expected: self.employee_count.value(),
                actual: selected_count,
            });
        }
        self.status = RequestStatus::Assigned;
        self.touch(clock);
        Ok(())
    }

    /// Moves the request to `in_progress` when an assigned employee starts.
    ///
    /// # Errors
    ///
    /// Returns [`RequestDomainError::RoleNotPermitted`] for non-employee
    /// actors, [`RequestDomainError::NotAssignedEmployee`] when the actor is
    /// not in `assigned`, and
    /// [`RequestDomainError::InvalidStatusTransition`] outside `assigned`.
    pub fn start_work(
        &mut self,
        actor: Actor,
        assigned: &[ProfileId],
        clock: &impl Clock,
    ) -> Result<(), RequestDomainError> {
        self.require_role(actor, Role::Employee, "start work on")?;
        self.require_assigned(actor, assigned)?;
        self.guard_transition(RequestStatus::InProgress)?;
        self.status = RequestStatus::InProgress;
        self.touch(clock);
        Ok(())
    }

    /// Marks the job done and hands it to the customer for confirmation.
    ///
    /// Accepts both `assigned` and `in_progress` as starting points and
    /// stamps `completed_at`.
    ///
    /// # Errors
    ///
    /// Returns [`RequestDomainError::RoleNotPermitted`] for non-employee
    /// actors, [`RequestDomainError::NotAssignedEmployee`] when the actor is
    /// not in `assigned`, and
    /// [`RequestDomainError::InvalidStatusTransition`] elsewhere in the
    /// workflow.
    pub fn mark_completed(
        &mut self,
        actor: Actor,
        assigned: &[ProfileId],
        clock: &impl Clock,
    ) -> Result<(), RequestDomainError> {
        self.require_role(actor, Role::Employee, "mark complete")?;
        self.require_assigned(actor, assigned)?;
        self.guard_transition(RequestStatus::AwaitingConfirmation)?;
        self.status = RequestStatus::AwaitingConfirmation;
        self.completed_at = Some(clock.utc());
        self.touch(clock);
        Ok(())
    }

    /// Confirms a marked-complete job, finishing the workflow.
    ///
    /// Stamps `confirmed_at`.
    ///
    /// # Errors
    ///
    /// Returns [`RequestDomainError::RoleNotPermitted`] for non-customer
    /// actors, [`RequestDomainError::NotRequestOwner`] for customers other
    /// than the owner, and [`RequestDomainError::InvalidStatusTransition`]
    /// outside `awaiting_confirmation`.
    pub fn confirm_completion(
        &mut self,
        actor: Actor,
        clock: &impl Clock,
    ) -> Result<(), RequestDomainError> {
        self.require_role(actor, Role::Customer, "confirm")?;
        self.require_owner(actor)?;
        self.require_status(RequestStatus::AwaitingConfirmation, RequestStatus::Completed)?;
        self.status = RequestStatus::Completed;
        self.confirmed_at = Some(clock.utc());
        self.touch(clock);
        Ok(())
    }

    /// Rejects a marked-complete job, reverting it to `assigned`.
    ///
    /// Clears `completed_at` so the crew can finish the job properly.
    ///
    /// # Errors
    ///
    /// Returns [`RequestDomainError::RoleNotPermitted`] for non-customer
    /// actors, [`RequestDomainError::NotRequestOwner`] for customers other
    /// than the owner, and [`RequestDomainError::InvalidStatusTransition`]
    /// outside `awaiting_confirmation`.
    pub fn reject_completion(
        &mut self,
        actor: Actor,
        clock: &impl Clock,
    ) -> Result<(), RequestDomainError> {
        self.require_role(actor, Role::Customer, "reject")?;
        self.require_owner(actor)?;
        self.require_status(RequestStatus::AwaitingConfirmation, RequestStatus::Assigned)?;
        self.status = RequestStatus::Assigned;
        self.completed_at = None;
        self.touch(clock);
        Ok(())
    }

    /// Completes an assigned request directly, bypassing confirmation.
    ///
    /// Only available under [`AdminCompletionPolicy::Shortcut`]. Leaves the
    /// confirmation timestamps untouched because no one confirmed anything.
    ///
    /// # Errors
    ///
    /// Returns [`RequestDomainError::RoleNotPermitted`] for non-admin
    /// actors, [`RequestDomainError::ForceCompleteDisabled`] under the
    /// strict policy, and [`RequestDomainError::InvalidStatusTransition`]
    /// outside `assigned`.
    pub fn force_complete(
        &mut self,
        actor: Actor,
        policy: AdminCompletionPolicy,
        clock: &impl Clock,
    ) -> Result<(), RequestDomainError> {
        self.require_role(actor, Role::Admin, "force-complete")?;
        if policy == AdminCompletionPolicy::Strict {
            return Err(RequestDomainError::ForceCompleteDisabled {
                request_id: self.id,
            });
        }
        self.require_status(RequestStatus::Assigned, RequestStatus::Completed)?;
        self.status = RequestStatus::Completed;
        self.touch(clock);
        Ok(())
    }

    /// Cancels the request.
    ///
    /// Admins may cancel while `pending` or `assigned`; the owning customer
    /// may cancel only while `pending`.
    ///
    /// # Errors
    ///
    /// Returns [`RequestDomainError::NotRequestOwner`] for customers other
    /// than the owner, [`RequestDomainError::RoleNotPermitted`] for other
    /// unauthorised actors, and
    /// [`RequestDomainError::InvalidStatusTransition`] once work has begun
    /// or finished.
    pub fn cancel(&mut self, actor: Actor, clock: &impl Clock) -> Result<(), RequestDomainError> {
        match actor.role() {
            Role::Admin => {}
            Role::Customer => {
                self.require_owner(actor)?;
                if self.status != RequestStatus::Pending {
                    return Err(RequestDomainError::RoleNotPermitted {
                        request_id: self.id,
                        role: actor.role(),
                        action: "cancel",
                    });
                }
            }
            Role::Employee => {
                return Err(RequestDomainError::RoleNotPermitted {
                    request_id: self.id,
                    role: actor.role(),
                    action: "cancel",
                });
            }
        }
        self.guard_transition(RequestStatus::Cancelled)?;
        self.status = RequestStatus::Cancelled;
        self.touch(clock);
        Ok(())
    }

    fn guard_transition(&self, target: RequestStatus) -> Result<(), RequestDomainError> {
        if !self.status.can_transition_to(target) {
            return Err(RequestDomainError::InvalidStatusTransition {
                request_id: self.id,
                from: self.status,
                to: target,
            });
        }
        Ok(())
    }

    /// Pins the move to one source status. The graph alone is not enough
    /// here: `assigned → completed` is a legal edge reserved for the admin
    /// shortcut, so confirmation and rejection must also check where the
    /// request currently stands.
    fn require_status(
        &self,
        expected: RequestStatus,
        target: RequestStatus,
    ) -> Result<(), RequestDomainError> {
        if self.status != expected {
            return Err(RequestDomainError::InvalidStatusTransition {
                request_id: self.id,
                from: self.status,
                to: target,
            });
        }
        Ok(())
    }

    fn require_role(
        &self,
        actor: Actor,
        role: Role,
        action: &'static str,
    ) -> Result<(), RequestDomainError> {
        if actor.role() != role {
            return Err(RequestDomainError::RoleNotPermitted {
                request_id: self.id,
                role: actor.role(),
                action,
            });
        }
        Ok(())
    }

    fn require_owner(&self, actor: Actor) -> Result<(), RequestDomainError> {
        if actor.profile_id() != self.customer_id {
            return Err(RequestDomainError::NotRequestOwner {
                request_id: self.id,
            });
        }
        Ok(())
    }

    fn require_assigned(
        &self,
        actor: Actor,
        assigned: &[ProfileId],
    ) -> Result<(), RequestDomainError> {
        if !assigned.contains(&actor.profile_id()) {
            return Err(RequestDomainError::NotAssignedEmployee {
                request_id: self.id,
            });
        }
        Ok(())
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
