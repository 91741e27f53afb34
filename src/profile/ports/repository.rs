//! Repository port for profile persistence and lookup.

use crate::profile::domain::{Profile, ProfileId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for profile repository operations.
pub type ProfileRepositoryResult<T> = Result<T, ProfileRepositoryError>;

/// Profile persistence contract.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Stores a new profile.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileRepositoryError::DuplicateProfile`] when the profile
    /// ID already exists.
    async fn store(&self, profile: &Profile) -> ProfileRepositoryResult<()>;

    /// Finds a profile by identifier.
    ///
    /// Returns `None` when the profile does not exist.
    async fn find_by_id(&self, id: ProfileId) -> ProfileRepositoryResult<Option<Profile>>;

    /// Finds all profiles matching the given identifiers in one batched read.
    ///
    /// Unknown identifiers are skipped; the result order is unspecified.
    async fn find_by_ids(&self, ids: &[ProfileId]) -> ProfileRepositoryResult<Vec<Profile>>;

    /// Returns all profiles with the employee role.
    async fn list_employees(&self) -> ProfileRepositoryResult<Vec<Profile>>;
}

/// Errors returned by profile repository implementations.
#[derive(Debug, Clone, Error)]
pub enum ProfileRepositoryError {
    /// A profile with the same identifier already exists.
    #[error("duplicate profile identifier: {0}")]
    DuplicateProfile(ProfileId),

    /// The profile was not found.
    #[error("profile not found: {0}")]
    NotFound(ProfileId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl ProfileRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
