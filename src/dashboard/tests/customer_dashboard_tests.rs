//! Tests for the customer dashboard boundary.

use super::fixtures::{booking_command, seeded_world};
use crate::dashboard::{CustomerDashboard, DashboardError, SessionContext, StatusFilter};
use crate::profile::domain::Role;
use crate::request::domain::RequestStatus;
use chrono::NaiveDate;
use rstest::rstest;
use std::sync::Arc;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn construction_rejects_non_customer_sessions() {
    let world = seeded_world().await;

    let result = CustomerDashboard::new(
        Arc::clone(&world.requests),
        Arc::clone(&world.clock),
        &SessionContext::sign_in(world.admin.clone()),
    );

    assert_eq!(
        result.err(),
        Some(DashboardError::RoleMismatch {
            expected: Role::Customer,
            actual: Role::Admin,
        })
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn booking_for_another_customer_is_forbidden() {
    let world = seeded_world().await;
    let dashboard = world.customer_dashboard(&world.customer);
    let date = NaiveDate::from_ymd_opt(2025, 6, 1).expect("valid date");

    let result = dashboard
        .create_request(booking_command(world.other_customer.id(), date))
        .await;

    assert_eq!(result.err(), Some(DashboardError::Forbidden));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn my_requests_shows_only_own_bookings() {
    let world = seeded_world().await;
    let mine = world.book(&world.customer).await;
    world.book(&world.other_customer).await;

    let rows = world
        .customer_dashboard(&world.customer)
        .my_requests()
        .await
        .expect("listing should succeed");

    assert_eq!(rows.len(), 1);
    assert_eq!(rows.first().map(|row| row.id()), Some(mine.id()));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn pending_request_can_be_cancelled_by_owner() {
    let world = seeded_world().await;
    let request = world.book(&world.customer).await;
    let dashboard = world.customer_dashboard(&world.customer);

    dashboard
        .cancel_request(request.id())
        .await
        .expect("cancellation should succeed");

    let rows = dashboard
        .filtered_requests(StatusFilter::Status(RequestStatus::Cancelled))
        .await
        .expect("listing should succeed");
    assert_eq!(rows.len(), 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn assigned_request_cannot_be_cancelled_by_owner() {
    let world = seeded_world().await;
    let request = world.book_and_assign(&world.customer).await;

    let result = world
        .customer_dashboard(&world.customer)
        .cancel_request(request.id())
        .await;

    assert_eq!(result.err(), Some(DashboardError::OperationFailed));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn confirmation_completes_the_request() {
    let world = seeded_world().await;
    let request = world.book_and_assign(&world.customer).await;
    world
        .employee_dashboard(&world.employee_one)
        .mark_completed(request.id())
        .await
        .expect("marking should succeed");

    let dashboard = world.customer_dashboard(&world.customer);
    dashboard
        .confirm_completion(request.id())
        .await
        .expect("confirmation should succeed");

    let stats = dashboard.stats().await.expect("stats should succeed");
    assert_eq!(stats.completed, 1);
    assert_eq!(stats.awaiting, 0);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn rejection_returns_the_job_to_the_crew() {
    let world = seeded_world().await;
    let request = world.book_and_assign(&world.customer).await;
    world
        .employee_dashboard(&world.employee_two)
        .mark_completed(request.id())
        .await
        .expect("marking should succeed");

    let dashboard = world.customer_dashboard(&world.customer);
    dashboard
        .reject_completion(request.id())
        .await
        .expect("rejection should succeed");

    let active = dashboard
        .filtered_requests(StatusFilter::Active)
        .await
        .expect("listing should succeed");
    assert_eq!(active.len(), 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn confirming_a_pending_request_fails_generically() {
    let world = seeded_world().await;
    let request = world.book(&world.customer).await;

    let result = world
        .customer_dashboard(&world.customer)
        .confirm_completion(request.id())
        .await;

    assert_eq!(result.err(), Some(DashboardError::OperationFailed));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn stats_tally_the_whole_view(#[values(1_usize, 3_usize)] pending_count: usize) {
    let world = seeded_world().await;
    for _ in 0..pending_count {
        world.book(&world.customer).await;
    }
    world.book_and_assign(&world.customer).await;

    let stats = world
        .customer_dashboard(&world.customer)
        .stats()
        .await
        .expect("stats should succeed");

    assert_eq!(stats.total, pending_count + 1);
    assert_eq!(stats.pending, pending_count);
    assert_eq!(stats.active, 1);
}
