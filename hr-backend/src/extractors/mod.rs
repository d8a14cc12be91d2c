// src/extractors/mod.rs

pub mod body;
pub mod uuid;

pub use self::body::{JsonBody, QueryParams};
pub use self::uuid::ValidatedUuid;
