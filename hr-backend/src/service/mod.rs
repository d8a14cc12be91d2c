// src/service/mod.rs

pub mod action_log_service;
pub mod auth_service;
pub mod employee_service;
pub mod metrics_service;
pub mod performance_service;
pub mod policy_service;
pub mod project_service;
pub mod role_service;
