//! In-memory profile repository for tests and small deployments.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::profile::{
    domain::{Profile, ProfileId, Role},
    ports::{ProfileRepository, ProfileRepositoryError, ProfileRepositoryResult},
};

/// Thread-safe in-memory profile repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProfileRepository {
    state: Arc<RwLock<HashMap<ProfileId, Profile>>>,
}

impl InMemoryProfileRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned(err: impl ToString) -> ProfileRepositoryError {
    ProfileRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepository {
    async fn store(&self, profile: &Profile) -> ProfileRepositoryResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        if state.contains_key(&profile.id()) {
            return Err(ProfileRepositoryError::DuplicateProfile(profile.id()));
        }
        state.insert(profile.id(), profile.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: ProfileId) -> ProfileRepositoryResult<Option<Profile>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.get(&id).cloned())
    }

    async fn find_by_ids(&self, ids: &[ProfileId]) -> ProfileRepositoryResult<Vec<Profile>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(ids.iter().filter_map(|id| state.get(id).cloned()).collect())
    }

    async fn list_employees(&self) -> ProfileRepositoryResult<Vec<Profile>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state
            .values()
            .filter(|profile| profile.role() == Role::Employee)
            .cloned()
            .collect())
    }
}
