//! `PostgreSQL` repository implementation for request lifecycle storage.

use super::{
    models::{NewAssignmentRow, NewRequestRow, RequestChangeset, RequestRow},
    schema::{cleaning_requests, request_assignments},
};
use crate::profile::domain::ProfileId;
use crate::request::{
    domain::{
        CleaningRequest, EmployeeCount, HomeSize, PersistedRequestData, Price, RequestAssignment,
        RequestId, RequestStatus, ServiceLocation, ServiceSlot,
    },
    ports::{RequestRepository, RequestRepositoryError, RequestRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by request adapters.
pub type RequestPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed request repository.
#[derive(Debug, Clone)]
pub struct PostgresRequestRepository {
    pool: RequestPgPool,
}

impl PostgresRequestRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: RequestPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> RequestRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> RequestRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(RequestRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(RequestRepositoryError::persistence)?
    }
}

#[async_trait]
impl RequestRepository for PostgresRequestRepository {
    async fn store(&self, request: &CleaningRequest) -> RequestRepositoryResult<()> {
        let request_id = request.id();
        let new_row = to_new_row(request)?;

        self.run_blocking(move |connection| {
            diesel::insert_into(cleaning_requests::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        RequestRepositoryError::DuplicateRequest(request_id)
                    }
                    _ => RequestRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn update(&self, request: &CleaningRequest) -> RequestRepositoryResult<()> {
        let request_id = request.id();
        let changeset = to_changeset(request);

        self.run_blocking(move |connection| {
            let affected = diesel::update(
                cleaning_requests::table.filter(cleaning_requests::id.eq(request_id.into_inner())),
            )
            .set(&changeset)
            .execute(connection)
            .map_err(RequestRepositoryError::persistence)?;

            if affected == 0 {
                return Err(RequestRepositoryError::NotFound(request_id));
            }
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: RequestId) -> RequestRepositoryResult<Option<CleaningRequest>> {
        self.run_blocking(move |connection| {
            let row = cleaning_requests::table
                .filter(cleaning_requests::id.eq(id.into_inner()))
                .select(RequestRow::as_select())
                .first::<RequestRow>(connection)
                .optional()
                .map_err(RequestRepositoryError::persistence)?;
            row.map(row_to_request).transpose()
        })
        .await
    }

    async fn list_all(&self) -> RequestRepositoryResult<Vec<CleaningRequest>> {
        self.run_blocking(move |connection| {
            let rows = cleaning_requests::table
                .order(cleaning_requests::created_at.desc())
                .select(RequestRow::as_select())
                .load::<RequestRow>(connection)
                .map_err(RequestRepositoryError::persistence)?;
            rows.into_iter().map(row_to_request).collect()
        })
        .await
    }

    async fn list_by_customer(
        &self,
        customer_id: ProfileId,
    ) -> RequestRepositoryResult<Vec<CleaningRequest>> {
        self.run_blocking(move |connection| {
            let rows = cleaning_requests::table
                .filter(cleaning_requests::customer_id.eq(customer_id.into_inner()))
                .order(cleaning_requests::created_at.desc())
                .select(RequestRow::as_select())
                .load::<RequestRow>(connection)
                .map_err(RequestRepositoryError::persistence)?;
            rows.into_iter().map(row_to_request).collect()
        })
        .await
    }

    async fn list_by_employee(
        &self,
        employee_id: ProfileId,
    ) -> RequestRepositoryResult<Vec<CleaningRequest>> {
        self.run_blocking(move |connection| {
            let rows = cleaning_requests::table
                .inner_join(request_assignments::table)
                .filter(request_assignments::employee_id.eq(employee_id.into_inner()))
                .order((
                    cleaning_requests::service_date.asc(),
                    cleaning_requests::service_time.asc(),
                ))
                .select(RequestRow::as_select())
                .load::<RequestRow>(connection)
                .map_err(RequestRepositoryError::persistence)?;
            rows.into_iter().map(row_to_request).collect()
        })
        .await
    }

    async fn assign_employees(
        &self,
        request: &CleaningRequest,
        employee_ids: &[ProfileId],
    ) -> RequestRepositoryResult<()> {
        let request_id = request.id();
        let changeset = to_changeset(request);
        // The domain transition already stamped `updated_at`; the assignment
        // rows carry the same instant instead of a second clock read.
        let assigned_at = request.updated_at();
        let new_rows: Vec<NewAssignmentRow> = employee_ids
            .iter()
            .map(|employee_id| NewAssignmentRow {
                id: uuid::Uuid::new_v4(),
                request_id: request_id.into_inner(),
                employee_id: employee_id.into_inner(),
                created_at: assigned_at,
            })
            .collect();

        self.run_blocking(move |connection| {
            // One transaction: the assignment replace and the status write
            // either both land or neither does.
            connection
                .transaction::<_, DieselError, _>(|tx| {
                    diesel::delete(
                        request_assignments::table
                            .filter(request_assignments::request_id.eq(request_id.into_inner())),
                    )
                    .execute(tx)?;

                    diesel::insert_into(request_assignments::table)
                        .values(&new_rows)
                        .execute(tx)?;

                    let affected = diesel::update(
                        cleaning_requests::table
                            .filter(cleaning_requests::id.eq(request_id.into_inner())),
                    )
                    .set(&changeset)
                    .execute(tx)?;

                    if affected == 0 {
                        return Err(DieselError::NotFound);
                    }
                    Ok(())
                })
                .map_err(|err| match err {
                    DieselError::NotFound => RequestRepositoryError::NotFound(request_id),
                    _ => RequestRepositoryError::persistence(err),
                })
        })
        .await
    }

    async fn assigned_employees(
        &self,
        request_id: RequestId,
    ) -> RequestRepositoryResult<Vec<ProfileId>> {
        self.run_blocking(move |connection| {
            let ids = request_assignments::table
                .filter(request_assignments::request_id.eq(request_id.into_inner()))
                .select(request_assignments::employee_id)
                .load::<uuid::Uuid>(connection)
                .map_err(RequestRepositoryError::persistence)?;
            Ok(ids.into_iter().map(ProfileId::from_uuid).collect())
        })
        .await
    }

    async fn list_assignments(
        &self,
        request_ids: &[RequestId],
    ) -> RequestRepositoryResult<Vec<RequestAssignment>> {
        let lookup: Vec<uuid::Uuid> = request_ids.iter().map(|id| id.into_inner()).collect();
        self.run_blocking(move |connection| {
            let pairs = request_assignments::table
                .filter(request_assignments::request_id.eq_any(&lookup))
                .select((
                    request_assignments::request_id,
                    request_assignments::employee_id,
                ))
                .load::<(uuid::Uuid, uuid::Uuid)>(connection)
                .map_err(RequestRepositoryError::persistence)?;
            Ok(pairs
                .into_iter()
                .map(|(request_id, employee_id)| RequestAssignment {
                    request_id: RequestId::from_uuid(request_id),
                    employee_id: ProfileId::from_uuid(employee_id),
                })
                .collect())
        })
        .await
    }
}

fn to_new_row(request: &CleaningRequest) -> RequestRepositoryResult<NewRequestRow> {
    let employee_count =
        i16::from(request.employee_count().value());
    let price =
        i32::try_from(request.price().amount()).map_err(RequestRepositoryError::persistence)?;

    Ok(NewRequestRow {
        id: request.id().into_inner(),
        customer_id: request.customer_id().into_inner(),
        city: request.location().city().to_owned(),
        district: request.location().district().to_owned(),
        neighborhood: request.location().neighborhood().to_owned(),
        address_detail: request.location().address_detail().to_owned(),
        service_date: request.slot().service_date(),
        service_time: request.slot().service_time(),
        home_size: request.home_size().as_str().to_owned(),
        employee_count,
        special_notes: request.special_notes().map(str::to_owned),
        status: request.status().as_str().to_owned(),
        price,
        completed_at: request.completed_at(),
        confirmed_at: request.confirmed_at(),
        created_at: request.created_at(),
        updated_at: request.updated_at(),
    })
}

fn to_changeset(request: &CleaningRequest) -> RequestChangeset {
    RequestChangeset {
        status: request.status().as_str().to_owned(),
        completed_at: request.completed_at(),
        confirmed_at: request.confirmed_at(),
        updated_at: request.updated_at(),
    }
}

fn row_to_request(row: RequestRow) -> RequestRepositoryResult<CleaningRequest> {
    let home_size =
        HomeSize::try_from(row.home_size.as_str()).map_err(RequestRepositoryError::persistence)?;
    let status =
        RequestStatus::try_from(row.status.as_str()).map_err(RequestRepositoryError::persistence)?;
    let crew = u8::try_from(row.employee_count).map_err(RequestRepositoryError::persistence)?;
    let employee_count =
        EmployeeCount::new(crew).map_err(RequestRepositoryError::persistence)?;
    let amount = u32::try_from(row.price).map_err(RequestRepositoryError::persistence)?;
    let location = ServiceLocation::new(
        row.city,
        row.district,
        row.neighborhood,
        row.address_detail,
    )
    .map_err(RequestRepositoryError::persistence)?;

    Ok(CleaningRequest::from_persisted(PersistedRequestData {
        id: RequestId::from_uuid(row.id),
        customer_id: ProfileId::from_uuid(row.customer_id),
        location,
        slot: ServiceSlot::new(row.service_date, row.service_time),
        home_size,
        employee_count,
        special_notes: row.special_notes,
        status,
        price: Price::new(amount),
        completed_at: row.completed_at,
        confirmed_at: row.confirmed_at,
        created_at: row.created_at,
        updated_at: row.updated_at,
    }))
}
