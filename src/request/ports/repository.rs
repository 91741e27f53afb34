//! Repository port for request persistence, lookup, and assignment storage.

use crate::profile::domain::ProfileId;
use crate::request::domain::{CleaningRequest, RequestAssignment, RequestId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for request repository operations.
pub type RequestRepositoryResult<T> = Result<T, RequestRepositoryError>;

/// Request persistence contract.
///
/// The gateway is transition-agnostic: it persists whatever aggregate state
/// it is handed and never validates workflow legality. That is the domain's
/// job.
#[async_trait]
pub trait RequestRepository: Send + Sync {
    /// Stores a new request.
    ///
    /// # Errors
    ///
    /// Returns [`RequestRepositoryError::DuplicateRequest`] when the request
    /// ID already exists.
    async fn store(&self, request: &CleaningRequest) -> RequestRepositoryResult<()>;

    /// Persists changes to an existing request (status, timestamps).
    ///
    /// # Errors
    ///
    /// Returns [`RequestRepositoryError::NotFound`] when the request does
    /// not exist.
    async fn update(&self, request: &CleaningRequest) -> RequestRepositoryResult<()>;

    /// Finds a request by identifier.
    ///
    /// Returns `None` when the request does not exist.
    async fn find_by_id(&self, id: RequestId) -> RequestRepositoryResult<Option<CleaningRequest>>;

    /// Returns all requests, newest created first (admin view ordering).
    async fn list_all(&self) -> RequestRepositoryResult<Vec<CleaningRequest>>;

    /// Returns a customer's own requests, newest created first.
    async fn list_by_customer(
        &self,
        customer_id: ProfileId,
    ) -> RequestRepositoryResult<Vec<CleaningRequest>>;

    /// Returns requests whose assignment set contains the employee, ordered
    /// by service date ascending (employee view ordering).
    async fn list_by_employee(
        &self,
        employee_id: ProfileId,
    ) -> RequestRepositoryResult<Vec<CleaningRequest>>;

    /// Replaces the request's assignment set wholesale and persists the
    /// already-transitioned aggregate in the same operation.
    ///
    /// # Errors
    ///
    /// Returns [`RequestRepositoryError::NotFound`] when the request does
    /// not exist.
    async fn assign_employees(
        &self,
        request: &CleaningRequest,
        employee_ids: &[ProfileId],
    ) -> RequestRepositoryResult<()>;

    /// Returns the employee identifiers assigned to one request.
    async fn assigned_employees(
        &self,
        request_id: RequestId,
    ) -> RequestRepositoryResult<Vec<ProfileId>>;

    /// Returns assignment pairs for many requests in one batched read.
    async fn list_assignments(
        &self,
        request_ids: &[RequestId],
    ) -> RequestRepositoryResult<Vec<RequestAssignment>>;
}

/// Errors returned by request repository implementations.
#[derive(Debug, Clone, Error)]
pub enum RequestRepositoryError {
    /// A request with the same identifier already exists.
    #[error("duplicate request identifier: {0}")]
    DuplicateRequest(RequestId),

    /// The request was not found.
    #[error("request not found: {0}")]
    NotFound(RequestId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl RequestRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
