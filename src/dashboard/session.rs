//! Explicit session context replacing ambient identity state.

use crate::profile::domain::{Profile, ProfileId, Role};
use crate::request::domain::Actor;

/// The signed-in identity a dashboard is constructed from.
///
/// The context has a clear lifecycle: created by [`SessionContext::sign_in`]
/// when the identity provider authenticates a profile, and consumed by
/// [`SessionContext::sign_out`]. Dashboards borrow the context, so none of
/// them can outlive the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionContext {
    profile: Profile,
}

impl SessionContext {
    /// Initialises a session for an authenticated profile.
    #[must_use]
    pub const fn sign_in(profile: Profile) -> Self {
        Self { profile }
    }

    /// Tears the session down, consuming the context.
    pub fn sign_out(self) {}

    /// Returns the signed-in profile.
    #[must_use]
    pub const fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Returns the signed-in profile identifier.
    #[must_use]
    pub const fn profile_id(&self) -> ProfileId {
        self.profile.id()
    }

    /// Returns the signed-in role.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.profile.role()
    }

    /// Returns the workflow actor for this session.
    #[must_use]
    pub const fn actor(&self) -> Actor {
        Actor::from_profile(&self.profile)
    }
}
