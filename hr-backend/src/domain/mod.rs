// src/domain/mod.rs
pub mod action_log_model;
pub mod company_metrics_model;
pub mod company_policy_model;
pub mod employee_model;
pub mod performance_model;
pub mod project_metrics_model;
pub mod project_model;
pub mod role_model;
pub mod user_model;
