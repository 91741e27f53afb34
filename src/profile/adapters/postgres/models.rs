//! Diesel row models for profile persistence.

use super::schema::profiles;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for profile records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = profiles)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ProfileRow {
    /// Profile identifier.
    pub id: uuid::Uuid,
    /// Email address.
    pub email: String,
    /// Display name.
    pub full_name: String,
    /// Role string.
    pub role: String,
    /// Optional phone number.
    pub phone: Option<String>,
    /// Registration timestamp.
    pub created_at: DateTime<Utc>,
}

/// Insert model for profile records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = profiles)]
pub struct NewProfileRow {
    /// Profile identifier.
    pub id: uuid::Uuid,
    /// Email address.
    pub email: String,
    /// Display name.
    pub full_name: String,
    /// Role string.
    pub role: String,
    /// Optional phone number.
    pub phone: Option<String>,
    /// Registration timestamp.
    pub created_at: DateTime<Utc>,
}
