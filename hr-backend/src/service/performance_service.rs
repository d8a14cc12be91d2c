// src/service/performance_service.rs

use crate::api::dto::performance_dto::{
    PerformanceDetailDto, PerformanceDto, ProjectRefDto, RatePerformanceRequest,
};
use crate::db::DbPool;
use crate::domain::{performance_model, project_model};
use crate::error::AppResult;
use crate::repository::employee_repository::EmployeeRepository;
use crate::repository::performance_repository::PerformanceRepository;
use crate::repository::project_repository::ProjectRepository;
use crate::utils::error_helper::{convert_validation_errors, not_found_error};
use sea_orm::{ActiveModelBehavior, Set};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

pub struct PerformanceService {
    repo: Arc<PerformanceRepository>,
    employee_repo: Arc<EmployeeRepository>,
    project_repo: Arc<ProjectRepository>,
}

impl PerformanceService {
    pub fn new(db_pool: DbPool) -> Self {
        Self {
            repo: Arc::new(PerformanceRepository::new(db_pool.clone())),
            employee_repo: Arc::new(EmployeeRepository::new(db_pool.clone())),
            project_repo: Arc::new(ProjectRepository::new(db_pool)),
        }
    }

    /// 従業員とプロジェクトの両方が存在する場合のみ評価を追加する
    pub async fn rate_employee(
        &self,
        rated_by: Uuid,
        payload: RatePerformanceRequest,
    ) -> AppResult<PerformanceDto> {
        payload
            .validate()
            .map_err(|e| convert_validation_errors(e, "performance_service::rate_employee"))?;

        if self.employee_repo.find_by_id(payload.employee_id).await?.is_none() {
            return Err(not_found_error(
                "Employee not found",
                &payload.employee_id.to_string(),
                "performance_service::rate_employee",
            ));
        }

        if self.project_repo.find_by_id(payload.project_id).await?.is_none() {
            return Err(not_found_error(
                "Project not found",
                &payload.project_id.to_string(),
                "performance_service::rate_employee",
            ));
        }

        let created = self
            .repo
            .create(performance_model::ActiveModel {
                employee_id: Set(payload.employee_id),
                project_id: Set(payload.project_id),
                rating: Set(payload.rating),
                feedback: Set(payload.feedback),
                ..performance_model::ActiveModel::new()
            })
            .await?;

        info!(
            performance_id = %created.id,
            employee_id = %created.employee_id,
            rated_by = %rated_by,
            rating = created.rating,
            "Performance rated"
        );

        Ok(created.into())
    }

    /// 従業員の全評価（従業員とプロジェクトを解決済み）
    pub async fn get_employee_performance(
        &self,
        employee_id: Uuid,
    ) -> AppResult<Vec<PerformanceDetailDto>> {
        let rows = self.repo.find_by_employee_with_employee(employee_id).await?;

        let mut project_ids: Vec<Uuid> = rows.iter().map(|(p, _)| p.project_id).collect();
        project_ids.sort();
        project_ids.dedup();

        let projects: HashMap<Uuid, project_model::Model> = self
            .project_repo
            .find_by_ids(&project_ids)
            .await?
            .into_iter()
            .map(|p| (p.id, p))
            .collect();

        Ok(rows
            .into_iter()
            .map(|(performance, employee)| PerformanceDetailDto {
                id: performance.id,
                employee: employee.as_ref().map(Into::into),
                project: projects.get(&performance.project_id).map(ProjectRefDto::from),
                rating: performance.rating,
                feedback: performance.feedback,
                created_at: performance.created_at,
            })
            .collect())
    }
}
