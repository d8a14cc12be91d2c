// tests/integration/mod.rs
mod access_control_tests;
mod audit_log_tests;
mod auth_tests;
mod employee_tests;
mod metrics_tests;
mod project_tests;
mod workflow_tests;
