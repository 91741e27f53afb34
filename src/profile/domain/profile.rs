//! Profile aggregate and role definitions.

use super::{ParseRoleError, ProfileDomainError, ProfileId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Role a profile holds within the booking system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Dispatches requests and assigns employees.
    Admin,
    /// Carries out assigned cleaning jobs.
    Employee,
    /// Books cleanings and confirms completed work.
    Customer,
}

impl Role {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Employee => "employee",
            Self::Customer => "customer",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Role {
    type Error = ParseRoleError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "admin" => Ok(Self::Admin),
            "employee" => Ok(Self::Employee),
            "customer" => Ok(Self::Customer),
            _ => Err(ParseRoleError(value.to_owned())),
        }
    }
}

/// Identity record for a person known to the booking system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    id: ProfileId,
    email: String,
    full_name: String,
    role: Role,
    phone: Option<String>,
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedProfileData {
    /// Persisted profile identifier.
    pub id: ProfileId,
    /// Persisted email address.
    pub email: String,
    /// Persisted display name.
    pub full_name: String,
    /// Persisted role.
    pub role: Role,
    /// Persisted phone number, if any.
    pub phone: Option<String>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Profile {
    /// Creates a new profile at registration time.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileDomainError::InvalidEmail`] when the email is blank
    /// or lacks an `@` separator, and [`ProfileDomainError::EmptyFullName`]
    /// when the name is blank.
    pub fn new(
        email: impl Into<String>,
        full_name: impl Into<String>,
        role: Role,
        clock: &impl Clock,
    ) -> Result<Self, ProfileDomainError> {
        let email = email.into();
        let trimmed_email = email.trim();
        if trimmed_email.is_empty() || !trimmed_email.contains('@') {
            return Err(ProfileDomainError::InvalidEmail(email));
        }

        let full_name = full_name.into();
        let trimmed_name = full_name.trim();
        if trimmed_name.is_empty() {
            return Err(ProfileDomainError::EmptyFullName);
        }

        Ok(Self {
            id: ProfileId::new(),
            email: trimmed_email.to_owned(),
            full_name: trimmed_name.to_owned(),
            role,
            phone: None,
            created_at: clock.utc(),
        })
    }

    /// Sets the optional phone number.
    #[must_use]
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Reconstructs a profile from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedProfileData) -> Self {
        Self {
            id: data.id,
            email: data.email,
            full_name: data.full_name,
            role: data.role,
            phone: data.phone,
            created_at: data.created_at,
        }
    }

    /// Returns the profile identifier.
    #[must_use]
    pub const fn id(&self) -> ProfileId {
        self.id
    }

    /// Returns the email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the display name.
    #[must_use]
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// Returns the role.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Returns the phone number, if any.
    #[must_use]
    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    /// Returns the registration timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockable::DefaultClock;
    use rstest::rstest;

    #[rstest]
    #[case("admin", Role::Admin)]
    #[case("employee", Role::Employee)]
    #[case("customer", Role::Customer)]
    #[case("  Admin  ", Role::Admin)]
    fn role_parses_storage_strings(#[case] raw: &str, #[case] expected: Role) {
        assert_eq!(Role::try_from(raw), Ok(expected));
    }

    #[rstest]
    fn role_rejects_unknown_string() {
        assert_eq!(
            Role::try_from("manager"),
            Err(ParseRoleError("manager".to_owned()))
        );
    }

    #[rstest]
    #[case(Role::Admin, "admin")]
    #[case(Role::Employee, "employee")]
    #[case(Role::Customer, "customer")]
    fn role_as_str_matches_wire_format(#[case] role: Role, #[case] expected: &str) {
        assert_eq!(role.as_str(), expected);
    }

    #[rstest]
    fn role_serialises_to_snake_case() -> eyre::Result<()> {
        assert_eq!(serde_json::to_string(&Role::Employee)?, r#""employee""#);
        assert_eq!(serde_json::from_str::<Role>(r#""admin""#)?, Role::Admin);
        Ok(())
    }

    #[rstest]
    fn profile_new_trims_and_keeps_role() {
        let profile = Profile::new("  ada@example.com ", " Ada Kaya ", Role::Customer, &DefaultClock)
            .expect("valid profile")
            .with_phone("+90 555 000 0000");

        assert_eq!(profile.email(), "ada@example.com");
        assert_eq!(profile.full_name(), "Ada Kaya");
        assert_eq!(profile.role(), Role::Customer);
        assert_eq!(profile.phone(), Some("+90 555 000 0000"));
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("no-separator")]
    fn profile_new_rejects_invalid_email(#[case] email: &str) {
        let result = Profile::new(email, "Ada Kaya", Role::Customer, &DefaultClock);
        assert_eq!(
            result,
            Err(ProfileDomainError::InvalidEmail(email.to_owned()))
        );
    }

    #[rstest]
    fn profile_new_rejects_blank_name() {
        let result = Profile::new("ada@example.com", "   ", Role::Employee, &DefaultClock);
        assert_eq!(result, Err(ProfileDomainError::EmptyFullName));
    }
}
