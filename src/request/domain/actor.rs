//! Actor identity carried into every workflow transition.

use crate::profile::domain::{Profile, ProfileId, Role};
use serde::{Deserialize, Serialize};

/// Who is attempting a workflow action.
///
/// Every transition method takes an `Actor` so that role gating and
/// ownership checks live in the domain rather than in ambient session
/// state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    profile_id: ProfileId,
    role: Role,
}

impl Actor {
    /// Creates an actor from a profile identifier and role.
    #[must_use]
    pub const fn new(profile_id: ProfileId, role: Role) -> Self {
        Self { profile_id, role }
    }

    /// Creates an actor from a signed-in profile.
    #[must_use]
    pub const fn from_profile(profile: &Profile) -> Self {
        Self::new(profile.id(), profile.role())
    }

    /// Returns the acting profile identifier.
    #[must_use]
    pub const fn profile_id(self) -> ProfileId {
        self.profile_id
    }

    /// Returns the acting role.
    #[must_use]
    pub const fn role(self) -> Role {
        self.role
    }
}
