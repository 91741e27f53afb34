//! Unit tests for the role-scoped dashboards.


mod customer_dashboard_tests;
