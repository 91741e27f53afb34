//! Diesel schema for profile persistence.

diesel::table! {
    /// Identity records created at registration.
    profiles (id) {
        /// Profile identifier.
        id -> Uuid,
        /// Email address.
        #[max_length = 255]
        email -> Varchar,
        /// Display name.
        #[max_length = 255]
        full_name -> Varchar,
        /// Role: admin, employee, or customer.
        #[max_length = 20]
        role -> Varchar,
        /// Optional phone number.
        #[max_length = 50]
        phone -> Nullable<Varchar>,
        /// Registration timestamp.
        created_at -> Timestamptz,
    }
}
