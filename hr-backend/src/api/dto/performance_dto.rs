// src/api/dto/performance_dto.rs

use crate::domain::{employee_model, performance_model, project_model};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Deserialize, Serialize, Debug, Clone, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RatePerformanceRequest {
    pub employee_id: Uuid,

    pub project_id: Uuid,

    #[validate(range(min = 1, max = 10, message = "Rating must be between 1 and 10"))]
    pub rating: i32,

    #[validate(length(min = 1, message = "Feedback is required"))]
    pub feedback: String,
}

/// 作成直後の評価レコード
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceDto {
    pub id: Uuid,
    pub employee_id: Uuid,
    pub project_id: Uuid,
    pub rating: i32,
    pub feedback: String,
    pub created_at: DateTime<Utc>,
}

impl From<performance_model::Model> for PerformanceDto {
    fn from(model: performance_model::Model) -> Self {
        Self {
            id: model.id,
            employee_id: model.employee_id,
            project_id: model.project_id,
            rating: model.rating,
            feedback: model.feedback,
            created_at: model.created_at,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRefDto {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
}

impl From<&employee_model::Model> for EmployeeRefDto {
    fn from(model: &employee_model::Model) -> Self {
        Self {
            id: model.id,
            first_name: model.first_name.clone(),
            last_name: model.last_name.clone(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ProjectRefDto {
    pub id: Uuid,
    pub name: String,
}

impl From<&project_model::Model> for ProjectRefDto {
    fn from(model: &project_model::Model) -> Self {
        Self {
            id: model.id,
            name: model.name.clone(),
        }
    }
}

/// 従業員・プロジェクトを解決済みの評価
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceDetailDto {
    pub id: Uuid,
    pub employee: Option<EmployeeRefDto>,
    pub project: Option<ProjectRefDto>,
    pub rating: i32,
    pub feedback: String,
    pub created_at: DateTime<Utc>,
}
