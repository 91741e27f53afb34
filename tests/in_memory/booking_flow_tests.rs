//! End-to-end booking and confirmation workflow tests.

use lustro::request::domain::{CleaningRequest, Price, RequestStatus};
use rstest::rstest;

use super::helpers::{service_date, stage};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn full_workflow_runs_from_booking_to_confirmed_completion() {
    let stage = stage().await;

    // Customer books a medium home for a three-person crew.
    let request = stage.book(service_date(), 3).await;
    assert_eq!(request.status(), RequestStatus::Pending);
    assert_eq!(request.price(), Price::new(1600));
    assert_eq!(request.slot().service_date(), service_date());

    // Admin dispatches exactly three employees.
    let admin = stage.admin_dashboard();
    admin
        .assign_employees(request.id(), stage.crew(3))
        .await
        .expect("assignment should succeed");

    // One crew member starts, another marks the job done.
    let first = stage.employee_dashboard(stage.employees.first().expect("staged employee"));
    first
        .start_work(request.id())
        .await
        .expect("start should succeed");
    let second = stage.employee_dashboard(stage.employees.get(1).expect("staged employee"));
    second
        .mark_completed(request.id())
        .await
        .expect("marking should succeed");

    // Customer confirms.
    let customer = stage.customer_dashboard(&stage.customer);
    customer
        .confirm_completion(request.id())
        .await
        .expect("confirmation should succeed");

    let rows = customer
        .my_requests()
        .await
        .expect("listing should succeed");
    let done = rows.first().expect("one request");
    assert_eq!(done.status(), RequestStatus::Completed);
    assert!(done.completed_at().is_some());
    assert!(done.confirmed_at().is_some());
    assert_eq!(done.price(), Price::new(1600));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn rejection_loops_back_through_the_crew() {
    let stage = stage().await;
    let request = stage.book(service_date(), 2).await;
    stage
        .admin_dashboard()
        .assign_employees(request.id(), stage.crew(2))
        .await
        .expect("assignment should succeed");

    let worker = stage.employee_dashboard(stage.employees.first().expect("staged employee"));
    worker
        .mark_completed(request.id())
        .await
        .expect("marking should succeed");

    let customer = stage.customer_dashboard(&stage.customer);
    customer
        .reject_completion(request.id())
        .await
        .expect("rejection should succeed");

    // The timestamp is cleared and the job is workable again.
    let rows = customer
        .my_requests()
        .await
        .expect("listing should succeed");
    let reverted = rows.first().expect("one request");
    assert_eq!(reverted.status(), RequestStatus::Assigned);
    assert_eq!(reverted.completed_at(), None);

    worker
        .mark_completed(request.id())
        .await
        .expect("rework can be marked done");
    customer
        .confirm_completion(request.id())
        .await
        .expect("confirmation should succeed");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn price_is_fixed_at_booking_time() {
    let stage = stage().await;
    let request = stage.book(service_date(), 2).await;
    let booked_price = request.price();

    stage
        .admin_dashboard()
        .assign_employees(request.id(), stage.crew(2))
        .await
        .expect("assignment should succeed");
    stage
        .employee_dashboard(stage.employees.first().expect("staged employee"))
        .mark_completed(request.id())
        .await
        .expect("marking should succeed");

    let rows = stage
        .customer_dashboard(&stage.customer)
        .my_requests()
        .await
        .expect("listing should succeed");
    assert_eq!(rows.first().map(CleaningRequest::price), Some(booked_price));
    assert_eq!(booked_price, Price::new(1200));
}
