//! Service layer for request creation and listing.

use crate::profile::domain::ProfileId;
use crate::request::{
    domain::{
        CleaningRequest, EmployeeCount, HomeSize, NewRequestData, RequestDomainError, RequestId,
        ServiceLocation, ServiceSlot,
    },
    ports::{RequestRepository, RequestRepositoryError},
};
use chrono::{NaiveDate, NaiveTime};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Command payload for creating a cleaning request.
///
/// Raw field values are validated into domain types when the command is
/// dispatched, so a blank city or an out-of-range crew size surfaces as a
/// domain validation error rather than a constructor panic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateRequestCommand {
    customer_id: ProfileId,
    city: String,
    district: String,
    neighborhood: String,
    address_detail: String,
    service_date: NaiveDate,
    service_time: NaiveTime,
    home_size: HomeSize,
    employee_count: u8,
    special_notes: Option<String>,
}

impl CreateRequestCommand {
    /// Creates a command with the required booking fields.
    #[must_use]
    #[expect(clippy::too_many_arguments, reason = "every field is required at creation")]
    pub fn new(
        customer_id: ProfileId,
        city: impl Into<String>,
        district: impl Into<String>,
        neighborhood: impl Into<String>,
        address_detail: impl Into<String>,
        service_date: NaiveDate,
        service_time: NaiveTime,
        home_size: HomeSize,
        employee_count: u8,
    ) -> Self {
        Self {
            customer_id,
            city: city.into(),
            district: district.into(),
            neighborhood: neighborhood.into(),
            address_detail: address_detail.into(),
            service_date,
            service_time,
            home_size,
            employee_count,
            special_notes: None,
        }
    }

    /// Sets optional free-text notes.
    #[must_use]
    pub fn with_special_notes(mut self, notes: impl Into<String>) -> Self {
        self.special_notes = Some(notes.into());
        self
    }

    /// Returns the customer the request will belong to.
    #[must_use]
    pub const fn customer_id(&self) -> ProfileId {
        self.customer_id
    }
}

/// Service-level errors for booking operations.
#[derive(Debug, Error)]
pub enum BookingError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] RequestDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] RequestRepositoryError),
}

/// Result type for booking service operations.
pub type BookingResult<T> = Result<T, BookingError>;

/// Request creation and listing service.
pub struct BookingService<R, C>
where
    R: RequestRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

// Manual impl: a derive would bound `R: Clone` and `C: Clone`.
impl<R, C> Clone for BookingService<R, C>
where
    R: RequestRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<R, C> BookingService<R, C>
where
    R: RequestRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new booking service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Creates and persists a new pending request with its price fixed.
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::Domain`] when a location field is blank or
    /// the crew size is out of range, and [`BookingError::Repository`] when
    /// persistence fails.
    pub async fn create_request(
        &self,
        command: CreateRequestCommand,
    ) -> BookingResult<CleaningRequest> {
        let location = ServiceLocation::new(
            command.city,
            command.district,
            command.neighborhood,
            command.address_detail,
        )?;
        let employee_count = EmployeeCount::new(command.employee_count)?;

        let request = CleaningRequest::create(
            NewRequestData {
                customer_id: command.customer_id,
                location,
                slot: ServiceSlot::new(command.service_date, command.service_time),
                home_size: command.home_size,
                employee_count,
                special_notes: command.special_notes,
            },
            &*self.clock,
        );

        self.repository.store(&request).await?;
        Ok(request)
    }

    /// Retrieves a request by identifier.
    ///
    /// Returns `Ok(None)` when no such request exists.
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::Repository`] when persistence lookup fails.
    pub async fn find_request(&self, id: RequestId) -> BookingResult<Option<CleaningRequest>> {
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Lists every request, newest created first.
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::Repository`] when persistence lookup fails.
    pub async fn list_all(&self) -> BookingResult<Vec<CleaningRequest>> {
        Ok(self.repository.list_all().await?)
    }

    /// Lists one customer's requests, newest created first.
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::Repository`] when persistence lookup fails.
    pub async fn list_for_customer(
        &self,
        customer_id: ProfileId,
    ) -> BookingResult<Vec<CleaningRequest>> {
        Ok(self.repository.list_by_customer(customer_id).await?)
    }

    /// Lists the requests assigned to one employee, soonest service first.
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::Repository`] when persistence lookup fails.
    pub async fn list_for_employee(
        &self,
        employee_id: ProfileId,
    ) -> BookingResult<Vec<CleaningRequest>> {
        Ok(self.repository.list_by_employee(employee_id).await?)
    }
}
