//! Diesel schema for request lifecycle persistence.
//!
//! Table and column names match the remote store verbatim; any change here
//! breaks interop with existing rows.

diesel::table! {
    /// Cleaning request records.
    cleaning_requests (id) {
        /// Request identifier.
        id -> Uuid,
        /// Owning customer profile.
        customer_id -> Uuid,
        /// City, free text.
        #[max_length = 100]
        city -> Varchar,
        /// District, free text.
        #[max_length = 100]
        district -> Varchar,
        /// Neighborhood, free text.
        #[max_length = 100]
        neighborhood -> Varchar,
        /// Street-level address detail.
        address_detail -> Text,
        /// Requested service date.
        service_date -> Date,
        /// Requested time of day.
        service_time -> Time,
        /// Home size: small, medium, or large.
        #[max_length = 20]
        home_size -> Varchar,
        /// Requested crew size, 1 to 5.
        employee_count -> SmallInt,
        /// Optional free-text notes.
        special_notes -> Nullable<Text>,
        /// Lifecycle status.
        #[max_length = 30]
        status -> Varchar,
        /// Price fixed at creation, whole currency units.
        price -> Integer,
        /// When an employee marked the job done.
        completed_at -> Nullable<Timestamptz>,
        /// When the customer confirmed completion.
        confirmed_at -> Nullable<Timestamptz>,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last mutation timestamp.
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Join records assigning employees to requests.
    request_assignments (id) {
        /// Assignment identifier.
        id -> Uuid,
        /// Assigned request.
        request_id -> Uuid,
        /// Assigned employee profile.
        employee_id -> Uuid,
        /// Assignment timestamp.
        created_at -> Timestamptz,
    }
}

diesel::joinable!(request_assignments -> cleaning_requests (request_id));

diesel::allow_tables_to_appear_in_same_query!(cleaning_requests, request_assignments);
