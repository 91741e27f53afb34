//! Domain model for identity records.
//!
//! The profile domain models the people the booking system knows about:
//! customers who book cleanings, employees who carry them out, and admins
//! who dispatch. Infrastructure concerns stay outside the domain boundary.

mod error;
mod ids;
mod profile;

pub use error::{ParseRoleError, ProfileDomainError};
pub use ids::ProfileId;
pub use profile::{PersistedProfileData, Profile, Role};
