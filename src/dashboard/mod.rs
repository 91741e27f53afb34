//! Role-scoped data contracts over the request store.
//!
//! Each dashboard is constructed from an explicit [`SessionContext`] and
//! exposes only the operations its role may perform. Dashboards are the
//! error boundary of the system: every repository or domain failure is
//! logged and surfaced as a single generic
//! [`DashboardError::OperationFailed`], never as structured detail for the
//! end user, and nothing is retried automatically.

mod admin;
mod customer;
mod employee;
mod error;
mod session;
mod views;

pub use admin::AdminDashboard;
pub use customer::CustomerDashboard;
pub use employee::EmployeeDashboard;
pub use error::DashboardError;
pub use session::SessionContext;
pub use views::{AdminRequestRow, EmployeeRequestRow, RequestStats, StatusFilter};

#[cfg(test)]
mod tests;
