// src/service/metrics_service.rs

use crate::api::dto::metrics_dto::{
    CompanyMetricsDto, CreateProjectMetricsRequest, DepartmentTurnoverDto,
    ProjectMetricsRecordDto, UpdateProjectMetricsRequest,
};
use crate::config::MetricsConfig;
use crate::db::DbPool;
use crate::domain::company_metrics_model::{self, COMPANY_SCOPE};
use crate::domain::project_metrics_model;
use crate::error::{AppError, AppResult};
use crate::repository::employee_repository::{DepartmentCountRow, EmployeeRepository};
use crate::repository::metrics_repository::MetricsRepository;
use crate::repository::project_repository::ProjectRepository;
use crate::utils::error_helper::{convert_validation_errors, not_found_error};
use crate::utils::patch::{patch, truthy};
use chrono::Utc;
use sea_orm::{ActiveModelBehavior, IntoActiveModel, Set};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

/// 部署未設定の従業員をまとめるキー
pub const UNASSIGNED_DEPARTMENT: &str = "unassigned";

pub struct MetricsService {
    repo: Arc<MetricsRepository>,
    employee_repo: Arc<EmployeeRepository>,
    project_repo: Arc<ProjectRepository>,
    config: MetricsConfig,
}

impl MetricsService {
    pub fn new(db_pool: DbPool, config: MetricsConfig) -> Self {
        Self {
            repo: Arc::new(MetricsRepository::new(db_pool.clone())),
            employee_repo: Arc::new(EmployeeRepository::new(db_pool.clone())),
            project_repo: Arc::new(ProjectRepository::new(db_pool)),
            config,
        }
    }

    // --- 会社全体スナップショット ---

    /// 従業員数と部署別人数を集計し、単一のスナップショットを上書き保存する
    pub async fn refresh_company_snapshot(&self) -> AppResult<CompanyMetricsDto> {
        let total_employees = self.employee_repo.count_all().await?;
        let rows = self.employee_repo.count_by_department(None).await?;
        let by_department: BTreeMap<String, i64> =
            department_breakdown(rows).into_iter().collect();

        let turnover_by_department = serde_json::to_value(&by_department).map_err(|e| {
            AppError::InternalServerError(format!("Failed to encode department counts: {}", e))
        })?;

        let snapshot = company_metrics_model::ActiveModel {
            id: Set(Uuid::new_v4()),
            scope: Set(COMPANY_SCOPE.to_string()),
            total_employees: Set(total_employees as i64),
            turnover_rate: Set(self.config.turnover_rate),
            employee_engagement: Set(self.config.employee_engagement),
            turnover_by_department: Set(turnover_by_department),
            last_updated: Set(Utc::now()),
        };

        let saved = self.repo.upsert_company_snapshot(snapshot).await?;
        info!(
            total_employees = saved.total_employees,
            departments = by_department.len(),
            "Company metrics refreshed"
        );

        Ok(saved.into())
    }

    pub async fn get_company_snapshot(&self) -> AppResult<CompanyMetricsDto> {
        let snapshot = self.repo.find_company_snapshot().await?.ok_or_else(|| {
            not_found_error(
                "Metrics not found",
                COMPANY_SCOPE,
                "metrics_service::get_company_snapshot",
            )
        })?;
        Ok(snapshot.into())
    }

    /// 退職済み（isEmployed = false）の従業員を部署別に数え、件数の降順で返す
    pub async fn turnover_by_department(&self) -> AppResult<DepartmentTurnoverDto> {
        let rows = self.employee_repo.count_by_department(Some(false)).await?;
        Ok(DepartmentTurnoverDto(department_breakdown(rows)))
    }

    // --- プロジェクト単位 ---

    pub async fn create_project_metrics(
        &self,
        payload: CreateProjectMetricsRequest,
    ) -> AppResult<ProjectMetricsRecordDto> {
        payload
            .validate()
            .map_err(|e| convert_validation_errors(e, "metrics_service::create_project_metrics"))?;

        if self.project_repo.find_by_id(payload.project_id).await?.is_none() {
            return Err(not_found_error(
                "Project not found",
                &payload.project_id.to_string(),
                "metrics_service::create_project_metrics",
            ));
        }

        let created = self
            .repo
            .create_project_metrics(project_metrics_model::ActiveModel {
                project_id: Set(payload.project_id),
                progress: Set(payload.progress),
                budget: Set(payload.budget),
                deadlines_met: Set(payload.deadlines_met),
                issues: Set(issues_to_json(&payload.issues)),
                ..project_metrics_model::ActiveModel::new()
            })
            .await?;

        info!(metrics_id = %created.id, project_id = %created.project_id, "Project metrics created");
        Ok(created.into())
    }

    pub async fn get_project_metrics(&self, project_id: Uuid) -> AppResult<ProjectMetricsRecordDto> {
        let metrics = self
            .repo
            .find_project_metrics_by_project(project_id)
            .await?
            .ok_or_else(|| {
                not_found_error(
                    "Metrics not found for this project",
                    &project_id.to_string(),
                    "metrics_service::get_project_metrics",
                )
            })?;
        Ok(metrics.into())
    }

    pub async fn update_project_metrics(
        &self,
        id: Uuid,
        payload: UpdateProjectMetricsRequest,
    ) -> AppResult<ProjectMetricsRecordDto> {
        payload
            .validate()
            .map_err(|e| convert_validation_errors(e, "metrics_service::update_project_metrics"))?;

        let current = self
            .repo
            .find_project_metrics_by_id(id)
            .await?
            .ok_or_else(|| {
                not_found_error(
                    "Metrics not found",
                    &id.to_string(),
                    "metrics_service::update_project_metrics",
                )
            })?;

        let mut metrics = current.clone().into_active_model();
        metrics.progress = Set(patch(payload.progress, current.progress));
        metrics.budget = Set(patch(payload.budget, current.budget));
        metrics.deadlines_met = Set(patch(payload.deadlines_met, current.deadlines_met));
        if let Some(issues) = truthy(payload.issues) {
            metrics.issues = Set(issues_to_json(&issues));
        }
        metrics.last_updated = Set(Utc::now());

        let updated = self.repo.update_project_metrics(metrics).await?;
        info!(metrics_id = %updated.id, "Project metrics updated");
        Ok(updated.into())
    }

    pub async fn delete_project_metrics(&self, id: Uuid) -> AppResult<()> {
        let deleted = self.repo.delete_project_metrics(id).await?;
        if deleted == 0 {
            return Err(not_found_error(
                "Metrics not found",
                &id.to_string(),
                "metrics_service::delete_project_metrics",
            ));
        }
        info!(metrics_id = %id, "Project metrics deleted");
        Ok(())
    }
}

fn issues_to_json(issues: &[String]) -> serde_json::Value {
    serde_json::Value::Array(
        issues
            .iter()
            .map(|issue| serde_json::Value::String(issue.clone()))
            .collect(),
    )
}

/// 部署別の件数を集約し、件数の降順（同数は部署名の昇順）に並べる。
/// 部署未設定は `unassigned` にまとめる。
pub fn department_breakdown(rows: Vec<DepartmentCountRow>) -> Vec<(String, i64)> {
    let mut merged: BTreeMap<String, i64> = BTreeMap::new();
    for row in rows {
        let department = row
            .department
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| UNASSIGNED_DEPARTMENT.to_string());
        *merged.entry(department).or_insert(0) += row.count;
    }

    let mut entries: Vec<(String, i64)> = merged.into_iter().collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(department: Option<&str>, count: i64) -> DepartmentCountRow {
        DepartmentCountRow {
            department: department.map(str::to_string),
            count,
        }
    }

    #[test]
    fn test_department_breakdown_sorts_descending() {
        let entries = department_breakdown(vec![
            row(Some("Sales"), 2),
            row(Some("Engineering"), 5),
            row(Some("HR"), 2),
        ]);
        assert_eq!(
            entries,
            vec![
                ("Engineering".to_string(), 5),
                ("HR".to_string(), 2),
                ("Sales".to_string(), 2),
            ]
        );
    }

    #[test]
    fn test_department_breakdown_groups_missing_department() {
        let entries = department_breakdown(vec![
            row(None, 3),
            row(Some(""), 1),
            row(Some("Sales"), 1),
        ]);
        assert_eq!(entries[0], (UNASSIGNED_DEPARTMENT.to_string(), 4));
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn test_department_breakdown_empty() {
        assert!(department_breakdown(Vec::new()).is_empty());
    }
}
