// src/config/mod.rs
pub mod app;

pub use app::{AppConfig, JwtSettings, MetricsConfig, PasswordSettings};

// Backward compatibility
pub type Config = AppConfig;
