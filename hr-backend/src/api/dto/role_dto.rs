// src/api/dto/role_dto.rs

use crate::domain::role_model;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Deserialize, Serialize, Debug, Clone, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoleRequest {
    #[validate(length(min = 1, max = 100, message = "Role name is required"))]
    pub role_name: String,

    #[serde(default)]
    pub permissions: Vec<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRoleRequest {
    #[validate(length(max = 100, message = "Role name must not exceed 100 characters"))]
    pub role_name: Option<String>,

    pub permissions: Option<Vec<String>>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RoleDto {
    pub id: Uuid,
    pub role_name: String,
    pub permissions: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<role_model::Model> for RoleDto {
    fn from(model: role_model::Model) -> Self {
        Self {
            permissions: model.permission_list(),
            id: model.id,
            role_name: model.role_name,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
