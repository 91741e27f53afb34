//! Shared helpers for in-memory integration tests.

use std::sync::Arc;

use chrono::{NaiveDate, NaiveTime};
use lustro::dashboard::{AdminDashboard, CustomerDashboard, EmployeeDashboard, SessionContext};
use lustro::profile::{
    adapters::memory::InMemoryProfileRepository,
    domain::{Profile, ProfileId, Role},
    ports::ProfileRepository,
};
use lustro::request::{
    adapters::memory::InMemoryRequestRepository,
    domain::{CleaningRequest, HomeSize},
    services::CreateRequestCommand,
};
use mockable::DefaultClock;

pub type TestAdminDashboard =
    AdminDashboard<InMemoryRequestRepository, InMemoryProfileRepository, DefaultClock>;
pub type TestCustomerDashboard = CustomerDashboard<InMemoryRequestRepository, DefaultClock>;
pub type TestEmployeeDashboard =
    EmployeeDashboard<InMemoryRequestRepository, InMemoryProfileRepository, DefaultClock>;

/// Repositories plus a registered cast of one admin, three employees, and
/// two customers.
pub struct Stage {
    pub requests: Arc<InMemoryRequestRepository>,
    pub profiles: Arc<InMemoryProfileRepository>,
    pub clock: Arc<DefaultClock>,
    pub admin: Profile,
    pub employees: Vec<Profile>,
    pub customer: Profile,
    pub other_customer: Profile,
}

/// Builds and seeds a fresh stage.
///
/// # Panics
///
/// Panics when profile construction or storage fails; both are
/// deterministic in these tests.
pub async fn stage() -> Stage {
    let clock = DefaultClock;
    let admin = Profile::new("dispatch@lustro.example", "Derya Aksoy", Role::Admin, &clock)
        .expect("valid admin profile");
    let employees = vec![
        Profile::new("mira@lustro.example", "Mira Sezer", Role::Employee, &clock)
            .expect("valid employee profile"),
        Profile::new("onur@lustro.example", "Onur Demir", Role::Employee, &clock)
            .expect("valid employee profile"),
        Profile::new("sel@lustro.example", "Selin Koc", Role::Employee, &clock)
            .expect("valid employee profile"),
    ];
    let customer = Profile::new("ada@example.com", "Ada Kaya", Role::Customer, &clock)
        .expect("valid customer profile")
        .with_phone("+90 555 000 0000");
    let other_customer = Profile::new("eren@example.com", "Eren Acar", Role::Customer, &clock)
        .expect("valid customer profile");

    let profiles = Arc::new(InMemoryProfileRepository::new());
    for profile in employees
        .iter()
        .chain([&admin, &customer, &other_customer])
    {
        profiles
            .store(profile)
            .await
            .expect("profile storage should succeed");
    }

    Stage {
        requests: Arc::new(InMemoryRequestRepository::new()),
        profiles,
        clock: Arc::new(clock),
        admin,
        employees,
        customer,
        other_customer,
    }
}

impl Stage {
    /// Opens the admin dashboard for the staged admin.
    ///
    /// # Panics
    ///
    /// Panics when the session role does not match, which cannot happen for
    /// the staged admin.
    pub fn admin_dashboard(&self) -> TestAdminDashboard {
        AdminDashboard::new(
            Arc::clone(&self.requests),
            Arc::clone(&self.profiles),
            Arc::clone(&self.clock),
            &SessionContext::sign_in(self.admin.clone()),
        )
        .expect("admin session should match")
    }

    /// Opens a customer dashboard for the given profile.
    ///
    /// # Panics
    ///
    /// Panics when the profile is not a customer.
    pub fn customer_dashboard(&self, profile: &Profile) -> TestCustomerDashboard {
        CustomerDashboard::new(
            Arc::clone(&self.requests),
            Arc::clone(&self.clock),
            &SessionContext::sign_in(profile.clone()),
        )
        .expect("customer session should match")
    }

    /// Opens an employee dashboard for the given profile.
    ///
    /// # Panics
    ///
    /// Panics when the profile is not an employee.
    pub fn employee_dashboard(&self, profile: &Profile) -> TestEmployeeDashboard {
        EmployeeDashboard::new(
            Arc::clone(&self.requests),
            Arc::clone(&self.profiles),
            Arc::clone(&self.clock),
            &SessionContext::sign_in(profile.clone()),
        )
        .expect("employee session should match")
    }

    /// Returns the first `count` staged employee identifiers.
    ///
    /// # Panics
    ///
    /// Panics when more employees are requested than the stage holds.
    pub fn crew(&self, count: usize) -> Vec<ProfileId> {
        assert!(count <= self.employees.len(), "stage has three employees");
        self.employees.iter().take(count).map(Profile::id).collect()
    }

    /// Books a request for the staged customer on the given date with the
    /// given crew size.
    ///
    /// # Panics
    ///
    /// Panics when booking fails; inputs here are always valid.
    pub async fn book(&self, date: NaiveDate, crew_size: u8) -> CleaningRequest {
        self.customer_dashboard(&self.customer)
            .create_request(booking_command(self.customer.id(), date, crew_size))
            .await
            .expect("booking should succeed")
    }
}

/// Builds a medium-home booking command.
///
/// # Panics
///
/// Panics when the fixed time literal is invalid, which it never is.
pub fn booking_command(
    customer_id: ProfileId,
    date: NaiveDate,
    crew_size: u8,
) -> CreateRequestCommand {
    CreateRequestCommand::new(
        customer_id,
        "Istanbul",
        "Kadikoy",
        "Moda",
        "Apt 4, Floor 2",
        date,
        NaiveTime::from_hms_opt(10, 0, 0).expect("valid time"),
        HomeSize::Medium,
        crew_size,
    )
}

/// Returns the canonical test service date.
///
/// # Panics
///
/// Panics when the fixed date literal is invalid, which it never is.
pub fn service_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 1).expect("valid date")
}
