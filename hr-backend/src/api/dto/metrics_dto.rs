// src/api/dto/metrics_dto.rs

use crate::domain::{company_metrics_model, project_metrics_model};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;
use uuid::Uuid;
use validator::Validate;

// --- プロジェクト単位 ---

#[derive(Deserialize, Serialize, Debug, Clone, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectMetricsRequest {
    /// 対象プロジェクトのID（`project` でも受け付ける）
    #[serde(alias = "project")]
    pub project_id: Uuid,

    #[validate(range(min = 0.0, max = 100.0, message = "Progress must be between 0 and 100"))]
    pub progress: f64,

    #[validate(range(min = 0.0, message = "Budget must not be negative"))]
    pub budget: f64,

    #[validate(range(min = 0, message = "Deadlines met must not be negative"))]
    pub deadlines_met: i32,

    #[serde(default)]
    pub issues: Vec<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProjectMetricsRequest {
    #[validate(range(min = 0.0, max = 100.0, message = "Progress must be between 0 and 100"))]
    pub progress: Option<f64>,

    #[validate(range(min = 0.0, message = "Budget must not be negative"))]
    pub budget: Option<f64>,

    #[validate(range(min = 0, message = "Deadlines met must not be negative"))]
    pub deadlines_met: Option<i32>,

    pub issues: Option<Vec<String>>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ProjectMetricsRecordDto {
    pub id: Uuid,
    pub project_id: Uuid,
    pub progress: f64,
    pub budget: f64,
    pub deadlines_met: i32,
    pub issues: Vec<String>,
    pub last_updated: DateTime<Utc>,
}

impl From<project_metrics_model::Model> for ProjectMetricsRecordDto {
    fn from(model: project_metrics_model::Model) -> Self {
        Self {
            issues: model.issue_list(),
            id: model.id,
            project_id: model.project_id,
            progress: model.progress,
            budget: model.budget,
            deadlines_met: model.deadlines_met,
            last_updated: model.last_updated,
        }
    }
}

// --- 会社全体 ---

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CompanyMetricsDto {
    pub total_employees: i64,
    pub turnover_rate: f64,
    pub employee_engagement: f64,
    pub turnover_by_department: BTreeMap<String, i64>,
    pub last_updated: DateTime<Utc>,
}

impl From<company_metrics_model::Model> for CompanyMetricsDto {
    fn from(model: company_metrics_model::Model) -> Self {
        Self {
            turnover_by_department: serde_json::from_value(model.turnover_by_department)
                .unwrap_or_default(),
            total_employees: model.total_employees,
            turnover_rate: model.turnover_rate,
            employee_engagement: model.employee_engagement,
            last_updated: model.last_updated,
        }
    }
}

/// 部署名 → 離職者数。件数の降順を保ったまま JSON オブジェクトとして出力する
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DepartmentTurnoverDto(pub Vec<(String, i64)>);

impl Serialize for DepartmentTurnoverDto {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(department, count)| (department, count)))
    }
}
