//! Repository failures surfacing at the dashboard boundary.

use std::io;
use std::sync::Arc;

use async_trait::async_trait;
use lustro::dashboard::{AdminDashboard, CustomerDashboard, DashboardError, SessionContext};
use lustro::profile::{
    adapters::memory::InMemoryProfileRepository,
    domain::{Profile, ProfileId, Role},
};
use lustro::request::{
    domain::{Actor, CleaningRequest, RequestAssignment, RequestId},
    ports::{RequestRepository, RequestRepositoryError, RequestRepositoryResult},
    services::{CancelRequestCommand, WorkflowError, WorkflowService},
};
use mockable::DefaultClock;
use mockall::mock;
use rstest::rstest;

use super::helpers::{booking_command, service_date};

mock! {
    RequestStore {}

    #[async_trait]
    impl RequestRepository for RequestStore {
        async fn store(&self, request: &CleaningRequest) -> RequestRepositoryResult<()>;
        async fn update(&self, request: &CleaningRequest) -> RequestRepositoryResult<()>;
        async fn find_by_id(
            &self,
            id: RequestId,
        ) -> RequestRepositoryResult<Option<CleaningRequest>>;
        async fn list_all(&self) -> RequestRepositoryResult<Vec<CleaningRequest>>;
        async fn list_by_customer(
            &self,
            customer_id: ProfileId,
        ) -> RequestRepositoryResult<Vec<CleaningRequest>>;
        async fn list_by_employee(
            &self,
            employee_id: ProfileId,
        ) -> RequestRepositoryResult<Vec<CleaningRequest>>;
        async fn assign_employees(
            &self,
            request: &CleaningRequest,
            employee_ids: &[ProfileId],
        ) -> RequestRepositoryResult<()>;
        async fn assigned_employees(
            &self,
            request_id: RequestId,
        ) -> RequestRepositoryResult<Vec<ProfileId>>;
        async fn list_assignments(
            &self,
            request_ids: &[RequestId],
        ) -> RequestRepositoryResult<Vec<RequestAssignment>>;
    }
}

fn outage() -> RequestRepositoryError {
    RequestRepositoryError::persistence(io::Error::other("connection reset"))
}

fn customer_profile() -> Profile {
    Profile::new("ada@example.com", "Ada Kaya", Role::Customer, &DefaultClock)
        .expect("valid customer profile")
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn listing_failure_is_collapsed_to_operation_failed() {
    let mut repository = MockRequestStore::new();
    repository
        .expect_list_by_customer()
        .returning(|_| Err(outage()));
    let profile = customer_profile();
    let dashboard = CustomerDashboard::new(
        Arc::new(repository),
        Arc::new(DefaultClock),
        &SessionContext::sign_in(profile),
    )
    .expect("customer session should match");

    let result = dashboard.my_requests().await;

    assert_eq!(result.err(), Some(DashboardError::OperationFailed));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn booking_failure_is_collapsed_to_operation_failed() {
    let mut repository = MockRequestStore::new();
    repository.expect_store().returning(|_| Err(outage()));
    let profile = customer_profile();
    let command = booking_command(profile.id(), service_date(), 2);
    let dashboard = CustomerDashboard::new(
        Arc::new(repository),
        Arc::new(DefaultClock),
        &SessionContext::sign_in(profile),
    )
    .expect("customer session should match");

    let result = dashboard.create_request(command).await;

    assert_eq!(result.err(), Some(DashboardError::OperationFailed));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn assignment_read_failure_stops_the_admin_view() {
    let mut repository = MockRequestStore::new();
    repository.expect_list_all().returning(|| Ok(Vec::new()));
    repository
        .expect_list_assignments()
        .returning(|_| Err(outage()));
    let admin = Profile::new("dispatch@lustro.example", "Derya Aksoy", Role::Admin, &DefaultClock)
        .expect("valid admin profile");
    let dashboard = AdminDashboard::new(
        Arc::new(repository),
        Arc::new(InMemoryProfileRepository::new()),
        Arc::new(DefaultClock),
        &SessionContext::sign_in(admin),
    )
    .expect("admin session should match");

    let result = dashboard.list_requests().await;

    assert_eq!(result.err(), Some(DashboardError::OperationFailed));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn workflow_service_surfaces_the_persistence_error() {
    let mut repository = MockRequestStore::new();
    repository.expect_find_by_id().returning(|_| Err(outage()));
    let service = WorkflowService::new(Arc::new(repository), Arc::new(DefaultClock));
    let actor = Actor::new(ProfileId::new(), Role::Admin);

    let result = service
        .cancel(actor, CancelRequestCommand::new(RequestId::new()))
        .await;

    assert!(matches!(
        result,
        Err(WorkflowError::Repository(
            RequestRepositoryError::Persistence(_)
        ))
    ));
}
