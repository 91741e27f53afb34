//! Crew assignment storage semantics.

use lustro::request::domain::{RequestAssignment, RequestStatus};
use lustro::request::ports::RequestRepository;
use rstest::rstest;

use super::helpers::{service_date, stage};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn dispatch_stores_the_exact_selected_crew() {
    let stage = stage().await;
    let request = stage.book(service_date(), 2).await;
    let crew = stage.crew(2);

    stage
        .admin_dashboard()
        .assign_employees(request.id(), crew.clone())
        .await
        .expect("assignment should succeed");

    let assigned = stage
        .requests
        .assigned_employees(request.id())
        .await
        .expect("lookup should succeed");
    assert_eq!(assigned, crew);
}

#[rstest]
#[case(1)]
#[case(3)]
#[tokio::test(flavor = "multi_thread")]
async fn wrong_crew_size_changes_nothing(#[case] selected: usize) {
    let stage = stage().await;
    let request = stage.book(service_date(), 2).await;

    let result = stage
        .admin_dashboard()
        .assign_employees(request.id(), stage.crew(selected))
        .await;
    assert!(result.is_err());

    let stored = stage
        .requests
        .find_by_id(request.id())
        .await
        .expect("lookup should succeed")
        .expect("request should exist");
    assert_eq!(stored.status(), RequestStatus::Pending);
    let assigned = stage
        .requests
        .assigned_employees(request.id())
        .await
        .expect("lookup should succeed");
    assert!(assigned.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn duplicate_selection_changes_nothing() {
    let stage = stage().await;
    let request = stage.book(service_date(), 2).await;
    let repeat = *stage.crew(1).first().expect("one employee");

    let result = stage
        .admin_dashboard()
        .assign_employees(request.id(), vec![repeat, repeat])
        .await;
    assert!(result.is_err());

    let stored = stage
        .requests
        .find_by_id(request.id())
        .await
        .expect("lookup should succeed")
        .expect("request should exist");
    assert_eq!(stored.status(), RequestStatus::Pending);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn replacement_drops_the_previous_crew() {
    let stage = stage().await;
    let request = stage.book(service_date(), 1).await;
    let original = stage.crew(1);
    stage
        .admin_dashboard()
        .assign_employees(request.id(), original.clone())
        .await
        .expect("assignment should succeed");

    // Replace the crew through the repository contract; the previous set
    // must be dropped wholesale, not merged.
    let stored = stage
        .requests
        .find_by_id(request.id())
        .await
        .expect("lookup should succeed")
        .expect("request should exist");
    let replacement = vec![stage.employees.get(2).expect("staged employee").id()];
    stage
        .requests
        .assign_employees(&stored, &replacement)
        .await
        .expect("replacement should succeed");

    let assigned = stage
        .requests
        .assigned_employees(request.id())
        .await
        .expect("lookup should succeed");
    assert_eq!(assigned, replacement);
    assert!(!assigned.contains(original.first().expect("one employee")));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_assignments_batches_many_requests() {
    let stage = stage().await;
    let first = stage.book(service_date(), 2).await;
    let second = stage.book(service_date(), 1).await;
    let admin = stage.admin_dashboard();
    admin
        .assign_employees(first.id(), stage.crew(2))
        .await
        .expect("assignment should succeed");
    admin
        .assign_employees(second.id(), vec![stage.employees.get(2).expect("staged employee").id()])
        .await
        .expect("assignment should succeed");

    let pairs = stage
        .requests
        .list_assignments(&[first.id(), second.id()])
        .await
        .expect("lookup should succeed");

    assert_eq!(pairs.len(), 3);
    assert!(pairs.contains(&RequestAssignment {
        request_id: second.id(),
        employee_id: stage.employees.get(2).expect("staged employee").id(),
    }));
}
