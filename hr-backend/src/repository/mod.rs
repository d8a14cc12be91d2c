// src/repository/mod.rs
pub mod action_log_repository;
pub mod company_policy_repository;
pub mod employee_repository;
pub mod metrics_repository;
pub mod performance_repository;
pub mod project_repository;
pub mod role_repository;
pub mod user_repository;
