// src/service/project_service.rs

use crate::api::dto::project_dto::{
    CreateProjectRequest, ProjectDto, ProjectFilterQuery, TeamMemberDto, UpdateProjectRequest,
};
use crate::db::DbPool;
use crate::domain::employee_model;
use crate::domain::project_model::{self, team_member_ids_to_json};
use crate::error::{AppError, AppResult};
use crate::repository::employee_repository::EmployeeRepository;
use crate::repository::project_repository::{ProjectFilter, ProjectRepository};
use crate::utils::error_helper::{convert_validation_errors, duplicate_error, not_found_error};
use crate::utils::patch::{patch, truthy};
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelBehavior, IntoActiveModel, Set};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;
use validator::Validate;

const DUPLICATE_NAME: &str = "Project with this name already exists under your management";

pub struct ProjectService {
    repo: Arc<ProjectRepository>,
    employee_repo: Arc<EmployeeRepository>,
}

impl ProjectService {
    pub fn new(db_pool: DbPool) -> Self {
        Self {
            repo: Arc::new(ProjectRepository::new(db_pool.clone())),
            employee_repo: Arc::new(EmployeeRepository::new(db_pool)),
        }
    }

    pub async fn create_project(
        &self,
        manager_id: Uuid,
        payload: CreateProjectRequest,
    ) -> AppResult<ProjectDto> {
        payload
            .validate()
            .map_err(|e| convert_validation_errors(e, "project_service::create_project"))?;

        if self
            .repo
            .find_by_name_for_manager(manager_id, &payload.name)
            .await?
            .is_some()
        {
            return Err(duplicate_error(
                DUPLICATE_NAME,
                "project_service::create_project",
            ));
        }

        let metrics = payload.metrics.unwrap_or_default();
        let project = project_model::ActiveModel {
            name: Set(payload.name),
            description: Set(payload.description),
            start_date: Set(payload.start_date),
            end_date: Set(payload.end_date),
            team_members: Set(team_member_ids_to_json(&payload.team_members)),
            progress: Set(metrics.progress.unwrap_or(0.0)),
            budget: Set(metrics.budget.unwrap_or(0.0)),
            performance_score: Set(metrics.performance_score.unwrap_or(0.0)),
            status: Set(payload.status.unwrap_or_default().as_str().to_string()),
            manager_id: Set(manager_id),
            ..project_model::ActiveModel::new()
        };

        let created = self.repo.create(project).await?;
        info!(project_id = %created.id, manager_id = %manager_id, "Project created");

        self.to_dto(created).await
    }

    /// 呼び出し元が管理するプロジェクトのみ
    pub async fn list_projects(&self, manager_id: Uuid) -> AppResult<Vec<ProjectDto>> {
        let projects = self.repo.find_all_for_manager(manager_id).await?;
        self.to_dtos(projects).await
    }

    pub async fn get_project(&self, manager_id: Uuid, id: Uuid) -> AppResult<ProjectDto> {
        let project = self
            .find_owned(manager_id, id, "project_service::get_project")
            .await?;
        self.to_dto(project).await
    }

    pub async fn update_project(
        &self,
        manager_id: Uuid,
        id: Uuid,
        payload: UpdateProjectRequest,
    ) -> AppResult<ProjectDto> {
        payload
            .validate()
            .map_err(|e| convert_validation_errors(e, "project_service::update_project"))?;

        let current = self
            .find_owned(manager_id, id, "project_service::update_project")
            .await?;

        // 改名先が自分の別プロジェクトと重複していないか
        if let Some(new_name) = payload.name.as_deref().filter(|n| !n.is_empty()) {
            if new_name != current.name {
                if let Some(other) = self
                    .repo
                    .find_by_name_for_manager(manager_id, new_name)
                    .await?
                {
                    if other.id != current.id {
                        return Err(duplicate_error(
                            DUPLICATE_NAME,
                            "project_service::update_project",
                        ));
                    }
                }
            }
        }

        // 片方の日付だけ更新した場合も含め、更新後の期間で前後関係を確認する
        let start_date = patch(payload.start_date, current.start_date);
        let end_date = patch(payload.end_date, current.end_date);
        ensure_date_order(start_date, end_date)?;

        let metrics = payload.metrics.unwrap_or_default();
        let mut project = current.clone().into_active_model();
        project.name = Set(patch(payload.name, current.name));
        project.description = Set(patch(payload.description, current.description));
        project.start_date = Set(start_date);
        project.end_date = Set(end_date);
        if let Some(members) = truthy(payload.team_members) {
            project.team_members = Set(team_member_ids_to_json(&members));
        }
        project.progress = Set(patch(metrics.progress, current.progress));
        project.budget = Set(patch(metrics.budget, current.budget));
        project.performance_score =
            Set(patch(metrics.performance_score, current.performance_score));
        if let Some(status) = payload.status {
            project.status = Set(status.as_str().to_string());
        }

        let updated = self.repo.update(project).await?;
        info!(project_id = %updated.id, "Project updated");

        self.to_dto(updated).await
    }

    pub async fn delete_project(&self, manager_id: Uuid, id: Uuid) -> AppResult<()> {
        let project = self
            .find_owned(manager_id, id, "project_service::delete_project")
            .await?;
        self.repo.delete(project.id).await?;
        info!(project_id = %id, "Project deleted");
        Ok(())
    }

    /// 名前・開始日範囲・チームメンバーの AND 条件で絞り込む
    pub async fn filter_projects(
        &self,
        manager_id: Uuid,
        query: ProjectFilterQuery,
    ) -> AppResult<Vec<ProjectDto>> {
        let filter = ProjectFilter {
            name: query.name,
            start_from: query.start_date,
            start_to: query.end_date,
        };

        let projects = self.repo.find_with_filter(manager_id, &filter).await?;
        let projects = filter_by_team_member(projects, query.team_member_id);

        if projects.is_empty() {
            return Err(not_found_error(
                "No projects found",
                &manager_id.to_string(),
                "project_service::filter_projects",
            ));
        }

        self.to_dtos(projects).await
    }

    /// 存在しない場合も他人の所有の場合も 404 とする
    async fn find_owned(
        &self,
        manager_id: Uuid,
        id: Uuid,
        context: &str,
    ) -> AppResult<project_model::Model> {
        let project = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Project not found", &id.to_string(), context))?;

        if project.manager_id != manager_id {
            warn!(
                project_id = %id,
                owner_id = %project.manager_id,
                caller_id = %manager_id,
                "Project access by non-owner"
            );
            return Err(not_found_error("Project not found", &id.to_string(), context));
        }

        Ok(project)
    }

    async fn to_dto(&self, project: project_model::Model) -> AppResult<ProjectDto> {
        let mut dtos = self.to_dtos(vec![project]).await?;
        Ok(dtos.remove(0))
    }

    /// チームメンバーIDを従業員の表示名に解決する（見つからないIDは省く）
    async fn to_dtos(&self, projects: Vec<project_model::Model>) -> AppResult<Vec<ProjectDto>> {
        let mut ids: Vec<Uuid> = projects
            .iter()
            .flat_map(|p| p.team_member_ids())
            .collect();
        ids.sort();
        ids.dedup();

        let employees: HashMap<Uuid, employee_model::Model> = self
            .employee_repo
            .find_by_ids(&ids)
            .await?
            .into_iter()
            .map(|e| (e.id, e))
            .collect();

        Ok(projects
            .into_iter()
            .map(|project| {
                let members = resolve_team_members(&project.team_member_ids(), &employees);
                ProjectDto::from_model(project, members)
            })
            .collect())
    }
}

fn ensure_date_order(start_date: DateTime<Utc>, end_date: DateTime<Utc>) -> AppResult<()> {
    if end_date < start_date {
        warn!(%start_date, %end_date, "Project end date precedes start date");
        return Err(AppError::ValidationErrors(vec![
            "end_date: End date must not be before start date".to_string(),
        ]));
    }
    Ok(())
}

fn filter_by_team_member(
    projects: Vec<project_model::Model>,
    member_id: Option<Uuid>,
) -> Vec<project_model::Model> {
    match member_id {
        Some(member_id) => projects
            .into_iter()
            .filter(|p| p.team_member_ids().contains(&member_id))
            .collect(),
        None => projects,
    }
}

fn resolve_team_members(
    ids: &[Uuid],
    employees: &HashMap<Uuid, employee_model::Model>,
) -> Vec<TeamMemberDto> {
    ids.iter()
        .filter_map(|id| employees.get(id))
        .map(|e| TeamMemberDto {
            id: e.id,
            first_name: e.first_name.clone(),
            last_name: e.last_name.clone(),
            name: e.full_name(),
        })
        .collect()
}
