// src/api/dto/policy_dto.rs

use crate::domain::company_policy_model;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Deserialize, Serialize, Debug, Clone, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePolicyRequest {
    #[serde(alias = "name")]
    #[validate(length(min = 1, max = 255, message = "Policy name is required"))]
    pub policy_name: String,

    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,

    #[validate(length(min = 1, message = "Value is required"))]
    pub value: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePolicyRequest {
    #[serde(alias = "name")]
    #[validate(length(max = 255, message = "Policy name must not exceed 255 characters"))]
    pub policy_name: Option<String>,

    pub description: Option<String>,

    pub value: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PolicyDto {
    pub id: Uuid,
    pub policy_name: String,
    pub description: String,
    pub value: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<company_policy_model::Model> for PolicyDto {
    fn from(model: company_policy_model::Model) -> Self {
        Self {
            id: model.id,
            policy_name: model.policy_name,
            description: model.description,
            value: model.value,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
