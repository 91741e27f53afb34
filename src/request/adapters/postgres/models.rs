//! Diesel row models for request persistence.

use super::schema::{cleaning_requests, request_assignments};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use diesel::prelude::*;

/// Query result row for cleaning request records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = cleaning_requests)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct RequestRow {
    /// Request identifier.
    pub id: uuid::Uuid,
    /// Owning customer profile.
    pub customer_id: uuid::Uuid,
    /// City.
    pub city: String,
    /// District.
    pub district: String,
    /// Neighborhood.
    pub neighborhood: String,
    /// Street-level address detail.
    pub address_detail: String,
    /// Requested service date.
    pub service_date: NaiveDate,
    /// Requested time of day.
    pub service_time: NaiveTime,
    /// Home size string.
    pub home_size: String,
    /// Requested crew size.
    pub employee_count: i16,
    /// Optional free-text notes.
    pub special_notes: Option<String>,
    /// Lifecycle status string.
    pub status: String,
    /// Price fixed at creation.
    pub price: i32,
    /// When an employee marked the job done.
    pub completed_at: Option<DateTime<Utc>>,
    /// When the customer confirmed completion.
    pub confirmed_at: Option<DateTime<Utc>>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for cleaning request records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = cleaning_requests)]
pub struct NewRequestRow {
    /// Request identifier.
    pub id: uuid::Uuid,
    /// Owning customer profile.
    pub customer_id: uuid::Uuid,
    /// City.
    pub city: String,
    /// District.
    pub district: String,
    /// Neighborhood.
    pub neighborhood: String,
    /// Street-level address detail.
    pub address_detail: String,
    /// Requested service date.
    pub service_date: NaiveDate,
    /// Requested time of day.
    pub service_time: NaiveTime,
    /// Home size string.
    pub home_size: String,
    /// Requested crew size.
    pub employee_count: i16,
    /// Optional free-text notes.
    pub special_notes: Option<String>,
    /// Lifecycle status string.
    pub status: String,
    /// Price fixed at creation.
    pub price: i32,
    /// When an employee marked the job done.
    pub completed_at: Option<DateTime<Utc>>,
    /// When the customer confirmed completion.
    pub confirmed_at: Option<DateTime<Utc>>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Changeset for the mutable subset of a request row.
///
/// Everything else (owner, location, slot, size, crew, price) is immutable
/// after creation. `treat_none_as_null` makes a cleared timestamp an
/// explicit NULL write, which the rejection path relies on.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = cleaning_requests, treat_none_as_null = true)]
pub struct RequestChangeset {
    /// Lifecycle status string.
    pub status: String,
    /// When an employee marked the job done.
    pub completed_at: Option<DateTime<Utc>>,
    /// When the customer confirmed completion.
    pub confirmed_at: Option<DateTime<Utc>>,
    /// Last mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for assignment join records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = request_assignments)]
pub struct NewAssignmentRow {
    /// Assignment identifier.
    pub id: uuid::Uuid,
    /// Assigned request.
    pub request_id: uuid::Uuid,
    /// Assigned employee profile.
    pub employee_id: uuid::Uuid,
    /// Assignment timestamp.
    pub created_at: DateTime<Utc>,
}
