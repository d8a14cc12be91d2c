// src/api/dto/mod.rs
pub mod action_log_dto;
pub mod auth_dto;
pub mod common;
pub mod employee_dto;
pub mod metrics_dto;
pub mod performance_dto;
pub mod policy_dto;
pub mod project_dto;
pub mod role_dto;

pub use common::MessageResponse;
