// src/api/dto/project_dto.rs

use super::common::{flexible_datetime, optional_flexible_datetime};
use crate::domain::project_model::{self, ProjectStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

// --- Request DTOs ---

#[derive(Deserialize, Serialize, Debug, Clone, Default, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProjectMetricsInput {
    #[validate(range(min = 0.0, max = 100.0, message = "Progress must be between 0 and 100"))]
    pub progress: Option<f64>,

    #[validate(range(min = 0.0, message = "Budget must not be negative"))]
    pub budget: Option<f64>,

    pub performance_score: Option<f64>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = validate_create_dates))]
pub struct CreateProjectRequest {
    #[validate(length(min = 1, max = 255, message = "Project name is required"))]
    pub name: String,

    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,

    #[serde(deserialize_with = "flexible_datetime::deserialize")]
    pub start_date: DateTime<Utc>,

    #[serde(deserialize_with = "flexible_datetime::deserialize")]
    pub end_date: DateTime<Utc>,

    #[serde(default)]
    pub team_members: Vec<Uuid>,

    #[validate(nested)]
    pub metrics: Option<ProjectMetricsInput>,

    pub status: Option<ProjectStatus>,
}

fn validate_create_dates(req: &CreateProjectRequest) -> Result<(), ValidationError> {
    if req.end_date < req.start_date {
        return Err(ValidationError::new("end_before_start")
            .with_message("End date must not be before start date".into()));
    }
    Ok(())
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProjectRequest {
    #[validate(length(max = 255, message = "Project name must not exceed 255 characters"))]
    pub name: Option<String>,

    pub description: Option<String>,

    #[serde(default, deserialize_with = "optional_flexible_datetime::deserialize")]
    pub start_date: Option<DateTime<Utc>>,

    #[serde(default, deserialize_with = "optional_flexible_datetime::deserialize")]
    pub end_date: Option<DateTime<Utc>>,

    pub team_members: Option<Vec<Uuid>>,

    #[validate(nested)]
    pub metrics: Option<ProjectMetricsInput>,

    pub status: Option<ProjectStatus>,
}

/// GET /api/project/filter のクエリ
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProjectFilterQuery {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "optional_flexible_datetime::deserialize")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "optional_flexible_datetime::deserialize")]
    pub end_date: Option<DateTime<Utc>>,
    pub team_member_id: Option<Uuid>,
}

// --- Response DTOs ---

/// チームメンバーの表示用エントリ
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TeamMemberDto {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectMetricsDto {
    pub progress: f64,
    pub budget: f64,
    pub performance_score: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDto {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub team_members: Vec<TeamMemberDto>,
    pub metrics: ProjectMetricsDto,
    pub status: ProjectStatus,
    pub manager: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProjectDto {
    /// 解決済みのチームメンバーと組み合わせてDTOを作る
    pub fn from_model(model: project_model::Model, team_members: Vec<TeamMemberDto>) -> Self {
        Self {
            status: model.project_status(),
            id: model.id,
            name: model.name,
            description: model.description,
            start_date: model.start_date,
            end_date: model.end_date,
            team_members,
            metrics: ProjectMetricsDto {
                progress: model.progress,
                budget: model.budget,
                performance_score: model.performance_score,
            },
            manager: model.manager_id,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
