// src/middleware/mod.rs

pub mod action_logger;
pub mod auth;
pub mod authorization;
