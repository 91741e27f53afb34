//! `PostgreSQL` repository implementation for profile storage.

use super::{
    models::{NewProfileRow, ProfileRow},
    schema::profiles,
};
use crate::profile::{
    domain::{PersistedProfileData, Profile, ProfileId, Role},
    ports::{ProfileRepository, ProfileRepositoryError, ProfileRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by profile adapters.
pub type ProfilePgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed profile repository.
#[derive(Debug, Clone)]
pub struct PostgresProfileRepository {
    pool: ProfilePgPool,
}

impl PostgresProfileRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: ProfilePgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> ProfileRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> ProfileRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(ProfileRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(ProfileRepositoryError::persistence)?
    }
}

#[async_trait]
impl ProfileRepository for PostgresProfileRepository {
    async fn store(&self, profile: &Profile) -> ProfileRepositoryResult<()> {
        let profile_id = profile.id();
        let new_row = to_new_row(profile);

        self.run_blocking(move |connection| {
            diesel::insert_into(profiles::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        ProfileRepositoryError::DuplicateProfile(profile_id)
                    }
                    _ => ProfileRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: ProfileId) -> ProfileRepositoryResult<Option<Profile>> {
        self.run_blocking(move |connection| {
            let row = profiles::table
                .filter(profiles::id.eq(id.into_inner()))
                .select(ProfileRow::as_select())
                .first::<ProfileRow>(connection)
                .optional()
                .map_err(ProfileRepositoryError::persistence)?;
            row.map(row_to_profile).transpose()
        })
        .await
    }

    async fn find_by_ids(&self, ids: &[ProfileId]) -> ProfileRepositoryResult<Vec<Profile>> {
        let lookup: Vec<uuid::Uuid> = ids.iter().map(|id| id.into_inner()).collect();
        self.run_blocking(move |connection| {
            let rows = profiles::table
                .filter(profiles::id.eq_any(&lookup))
                .select(ProfileRow::as_select())
                .load::<ProfileRow>(connection)
                .map_err(ProfileRepositoryError::persistence)?;
            rows.into_iter().map(row_to_profile).collect()
        })
        .await
    }

    async fn list_employees(&self) -> ProfileRepositoryResult<Vec<Profile>> {
        self.run_blocking(move |connection| {
            let rows = profiles::table
                .filter(profiles::role.eq(Role::Employee.as_str()))
                .select(ProfileRow::as_select())
                .load::<ProfileRow>(connection)
                .map_err(ProfileRepositoryError::persistence)?;
            rows.into_iter().map(row_to_profile).collect()
        })
        .await
    }
}

fn to_new_row(profile: &Profile) -> NewProfileRow {
    NewProfileRow {
        id: profile.id().into_inner(),
        email: profile.email().to_owned(),
        full_name: profile.full_name().to_owned(),
        role: profile.role().as_str().to_owned(),
        phone: profile.phone().map(str::to_owned),
        created_at: profile.created_at(),
    }
}

fn row_to_profile(row: ProfileRow) -> ProfileRepositoryResult<Profile> {
    let role = Role::try_from(row.role.as_str()).map_err(ProfileRepositoryError::persistence)?;
    Ok(Profile::from_persisted(PersistedProfileData {
        id: ProfileId::from_uuid(row.id),
        email: row.email,
        full_name: row.full_name,
        role,
        phone: row.phone,
        created_at: row.created_at,
    }))
}
