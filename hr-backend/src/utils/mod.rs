// src/utils/mod.rs

pub mod error_helper;
pub mod jwt;
pub mod password;
pub mod patch;
pub mod validation;
