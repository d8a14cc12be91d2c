// src/repository/metrics_repository.rs
use crate::domain::company_metrics_model::{
    self, ActiveModel as CompanyMetricsActiveModel, Entity as CompanyMetricsEntity,
    COMPANY_SCOPE,
};
use crate::domain::project_metrics_model::{
    self, ActiveModel as ProjectMetricsActiveModel, Entity as ProjectMetricsEntity,
};
use sea_orm::sea_query::OnConflict;
use sea_orm::{entity::*, query::*, DbConn, DbErr};
use uuid::Uuid;

#[derive(Clone)]
pub struct MetricsRepository {
    db: DbConn,
}

impl MetricsRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    // --- プロジェクト単位 ---

    pub async fn find_project_metrics_by_id(
        &self,
        id: Uuid,
    ) -> Result<Option<project_metrics_model::Model>, DbErr> {
        ProjectMetricsEntity::find_by_id(id).one(&self.db).await
    }

    /// プロジェクトのメトリクスのうち最新のもの
    pub async fn find_project_metrics_by_project(
        &self,
        project_id: Uuid,
    ) -> Result<Option<project_metrics_model::Model>, DbErr> {
        ProjectMetricsEntity::find()
            .filter(project_metrics_model::Column::ProjectId.eq(project_id))
            .order_by_desc(project_metrics_model::Column::LastUpdated)
            .one(&self.db)
            .await
    }

    pub async fn create_project_metrics(
        &self,
        metrics: ProjectMetricsActiveModel,
    ) -> Result<project_metrics_model::Model, DbErr> {
        metrics.insert(&self.db).await
    }

    pub async fn update_project_metrics(
        &self,
        metrics: ProjectMetricsActiveModel,
    ) -> Result<project_metrics_model::Model, DbErr> {
        metrics.update(&self.db).await
    }

    pub async fn delete_project_metrics(&self, id: Uuid) -> Result<u64, DbErr> {
        let result = ProjectMetricsEntity::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected)
    }

    // --- 会社全体スナップショット ---

    pub async fn find_company_snapshot(
        &self,
    ) -> Result<Option<company_metrics_model::Model>, DbErr> {
        CompanyMetricsEntity::find()
            .filter(company_metrics_model::Column::Scope.eq(COMPANY_SCOPE))
            .one(&self.db)
            .await
    }

    /// INSERT ... ON CONFLICT (scope) DO UPDATE による単一行の上書き
    pub async fn upsert_company_snapshot(
        &self,
        snapshot: CompanyMetricsActiveModel,
    ) -> Result<company_metrics_model::Model, DbErr> {
        CompanyMetricsEntity::insert(snapshot)
            .on_conflict(
                OnConflict::column(company_metrics_model::Column::Scope)
                    .update_columns([
                        company_metrics_model::Column::TotalEmployees,
                        company_metrics_model::Column::TurnoverRate,
                        company_metrics_model::Column::EmployeeEngagement,
                        company_metrics_model::Column::TurnoverByDepartment,
                        company_metrics_model::Column::LastUpdated,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await?;

        self.find_company_snapshot()
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("company_metrics".to_string()))
    }
}
