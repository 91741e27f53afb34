//! Domain model for cleaning request lifecycle management.
//!
//! The request domain models priced booking records, the status workflow
//! with its role-gated transitions, and employee assignment, while keeping
//! all infrastructure concerns outside of the domain boundary.

mod actor;
mod error;
mod ids;
mod location;
mod pricing;
mod request;
mod status;

pub use actor::Actor;
pub use error::{ParseHomeSizeError, ParseRequestStatusError, RequestDomainError};
pub use ids::RequestId;
pub use location::{ServiceLocation, ServiceSlot};
pub use pricing::{quote, EmployeeCount, HomeSize, Price};
pub use request::{
    AdminCompletionPolicy, CleaningRequest, NewRequestData, PersistedRequestData,
    RequestAssignment,
};
pub use status::RequestStatus;

pub use crate::profile::domain::{ProfileId, Role};
