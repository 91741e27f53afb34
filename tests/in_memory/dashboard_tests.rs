//! Cross-role dashboard view tests over shared in-memory stores.

use chrono::NaiveDate;
use lustro::dashboard::StatusFilter;
use lustro::request::domain::RequestStatus;
use rstest::rstest;

use super::helpers::{booking_command, service_date, stage};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn customers_never_see_each_other() {
    let stage = stage().await;
    let mine = stage.book(service_date(), 2).await;
    stage
        .customer_dashboard(&stage.other_customer)
        .create_request(booking_command(
            stage.other_customer.id(),
            service_date(),
            1,
        ))
        .await
        .expect("booking should succeed");

    let own_rows = stage
        .customer_dashboard(&stage.customer)
        .my_requests()
        .await
        .expect("listing should succeed");
    assert_eq!(own_rows.len(), 1);
    assert_eq!(own_rows.first().map(|row| row.id()), Some(mine.id()));

    let admin_rows = stage
        .admin_dashboard()
        .list_requests()
        .await
        .expect("listing should succeed");
    assert_eq!(admin_rows.len(), 2);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn employee_view_orders_by_service_date() {
    let stage = stage().await;
    let august = stage
        .book(NaiveDate::from_ymd_opt(2025, 8, 20).expect("valid date"), 1)
        .await;
    let june = stage
        .book(NaiveDate::from_ymd_opt(2025, 6, 2).expect("valid date"), 1)
        .await;
    let admin = stage.admin_dashboard();
    for request in [&august, &june] {
        admin
            .assign_employees(request.id(), stage.crew(1))
            .await
            .expect("assignment should succeed");
    }

    let rows = stage
        .employee_dashboard(stage.employees.first().expect("staged employee"))
        .my_assignments()
        .await
        .expect("listing should succeed");

    let ids: Vec<_> = rows.iter().map(|row| row.request.id()).collect();
    assert_eq!(ids, vec![june.id(), august.id()]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn status_tabs_partition_the_admin_view() {
    let stage = stage().await;
    stage.book(service_date(), 2).await;
    let assigned = stage.book(service_date(), 2).await;
    let cancelled = stage.book(service_date(), 2).await;
    let admin = stage.admin_dashboard();
    admin
        .assign_employees(assigned.id(), stage.crew(2))
        .await
        .expect("assignment should succeed");
    admin
        .cancel_request(cancelled.id())
        .await
        .expect("cancellation should succeed");

    let pending = admin
        .filtered_requests(StatusFilter::Status(RequestStatus::Pending))
        .await
        .expect("listing should succeed");
    let active = admin
        .filtered_requests(StatusFilter::Active)
        .await
        .expect("listing should succeed");
    let gone = admin
        .filtered_requests(StatusFilter::Status(RequestStatus::Cancelled))
        .await
        .expect("listing should succeed");

    assert_eq!(pending.len(), 1);
    assert_eq!(active.len(), 1);
    assert_eq!(active.first().map(|row| row.id()), Some(assigned.id()));
    assert_eq!(gone.len(), 1);
    assert_eq!(gone.first().map(|row| row.id()), Some(cancelled.id()));

    let stats = admin.stats().await.expect("stats should succeed");
    assert_eq!(stats.total, 3);
    assert_eq!(stats.pending, 1);
    assert_eq!(stats.active, 1);
    assert_eq!(stats.completed, 0);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn admin_view_is_newest_first() {
    let stage = stage().await;
    stage.book(service_date(), 1).await;
    stage.book(service_date(), 2).await;
    stage.book(service_date(), 3).await;

    let rows = stage
        .admin_dashboard()
        .list_requests()
        .await
        .expect("listing should succeed");

    assert_eq!(rows.len(), 3);
    assert!(rows.windows(2).all(|pair| matches!(
        pair,
        [newer, older] if newer.request.created_at() >= older.request.created_at()
    )));
}
