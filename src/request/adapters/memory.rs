//! In-memory request repository for tests and small deployments.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::profile::domain::ProfileId;
use crate::request::{
    domain::{CleaningRequest, RequestAssignment, RequestId},
    ports::{RequestRepository, RequestRepositoryError, RequestRepositoryResult},
};

/// Thread-safe in-memory request repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRequestRepository {
    state: Arc<RwLock<InMemoryRequestState>>,
}

#[derive(Debug, Default)]
struct InMemoryRequestState {
    requests: HashMap<RequestId, CleaningRequest>,
    assignments: HashMap<RequestId, Vec<ProfileId>>,
}

impl InMemoryRequestRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned(err: impl ToString) -> RequestRepositoryError {
    RequestRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

/// Sorts newest-created first, the admin and customer view ordering.
fn sort_created_desc(requests: &mut [CleaningRequest]) {
    requests.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
}

#[async_trait]
impl RequestRepository for InMemoryRequestRepository {
    async fn store(&self, request: &CleaningRequest) -> RequestRepositoryResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        if state.requests.contains_key(&request.id()) {
            return Err(RequestRepositoryError::DuplicateRequest(request.id()));
        }
        state.requests.insert(request.id(), request.clone());
        Ok(())
    }

    async fn update(&self, request: &CleaningRequest) -> RequestRepositoryResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        if !state.requests.contains_key(&request.id()) {
            return Err(RequestRepositoryError::NotFound(request.id()));
        }
        state.requests.insert(request.id(), request.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: RequestId) -> RequestRepositoryResult<Option<CleaningRequest>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.requests.get(&id).cloned())
    }

    async fn list_all(&self) -> RequestRepositoryResult<Vec<CleaningRequest>> {
        let state = self.state.read().map_err(poisoned)?;
        let mut requests: Vec<CleaningRequest> = state.requests.values().cloned().collect();
        sort_created_desc(&mut requests);
        Ok(requests)
    }

    async fn list_by_customer(
        &self,
        customer_id: ProfileId,
    ) -> RequestRepositoryResult<Vec<CleaningRequest>> {
        let state = self.state.read().map_err(poisoned)?;
        let mut requests: Vec<CleaningRequest> = state
            .requests
            .values()
            .filter(|request| request.customer_id() == customer_id)
            .cloned()
            .collect();
        sort_created_desc(&mut requests);
        Ok(requests)
    }

    async fn list_by_employee(
        &self,
        employee_id: ProfileId,
    ) -> RequestRepositoryResult<Vec<CleaningRequest>> {
        let state = self.state.read().map_err(poisoned)?;
        let mut requests: Vec<CleaningRequest> = state
            .assignments
            .iter()
            .filter(|(_, employees)| employees.contains(&employee_id))
            .filter_map(|(request_id, _)| state.requests.get(request_id).cloned())
            .collect();
        requests.sort_by_key(|request| {
            (
                request.slot().service_date(),
                request.slot().service_time(),
            )
        });
        Ok(requests)
    }

    async fn assign_employees(
        &self,
        request: &CleaningRequest,
        employee_ids: &[ProfileId],
    ) -> RequestRepositoryResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        if !state.requests.contains_key(&request.id()) {
            return Err(RequestRepositoryError::NotFound(request.id()));
        }
        // Wholesale replacement: the previous set is dropped, not merged.
        state.assignments.insert(request.id(), employee_ids.to_vec());
        state.requests.insert(request.id(), request.clone());
        Ok(())
    }

    async fn assigned_employees(
        &self,
        request_id: RequestId,
    ) -> RequestRepositoryResult<Vec<ProfileId>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.assignments.get(&request_id).cloned().unwrap_or_default())
    }

    async fn list_assignments(
        &self,
        request_ids: &[RequestId],
    ) -> RequestRepositoryResult<Vec<RequestAssignment>> {
        let state = self.state.read().map_err(poisoned)?;
        let mut pairs = Vec::new();
        for request_id in request_ids {
            if let Some(employees) = state.assignments.get(request_id) {
                pairs.extend(employees.iter().map(|employee_id| RequestAssignment {
                    request_id: *request_id,
                    employee_id: *employee_id,
                }));
            }
        }
        Ok(pairs)
    }
}
