// src/api/handlers/mod.rs
pub mod action_log_handler;
pub mod auth_handler;
pub mod employee_handler;
pub mod metrics_handler;
pub mod policy_handler;
pub mod project_handler;
pub mod role_handler;
