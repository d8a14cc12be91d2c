// src/repository/project_repository.rs
use crate::domain::project_model::{self, ActiveModel as ProjectActiveModel, Entity as ProjectEntity};
use crate::utils::validation::like_pattern;
use chrono::{DateTime, Utc};
use sea_orm::sea_query::{extension::postgres::PgExpr, Expr};
use sea_orm::{entity::*, query::*, Condition, DbConn, DbErr};
use uuid::Uuid;

/// プロジェクト検索条件（マネージャー単位で適用）
#[derive(Debug, Clone, Default)]
pub struct ProjectFilter {
    pub name: Option<String>,
    pub start_from: Option<DateTime<Utc>>,
    pub start_to: Option<DateTime<Utc>>,
}

#[derive(Clone)]
pub struct ProjectRepository {
    db: DbConn,
}

impl ProjectRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<project_model::Model>, DbErr> {
        ProjectEntity::find_by_id(id).one(&self.db).await
    }

    pub async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<project_model::Model>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        ProjectEntity::find()
            .filter(project_model::Column::Id.is_in(ids.to_vec()))
            .all(&self.db)
            .await
    }

    pub async fn find_all_for_manager(
        &self,
        manager_id: Uuid,
    ) -> Result<Vec<project_model::Model>, DbErr> {
        ProjectEntity::find()
            .filter(project_model::Column::ManagerId.eq(manager_id))
            .order_by_asc(project_model::Column::CreatedAt)
            .all(&self.db)
            .await
    }

    pub async fn find_by_name_for_manager(
        &self,
        manager_id: Uuid,
        name: &str,
    ) -> Result<Option<project_model::Model>, DbErr> {
        ProjectEntity::find()
            .filter(project_model::Column::ManagerId.eq(manager_id))
            .filter(project_model::Column::Name.eq(name))
            .one(&self.db)
            .await
    }

    pub async fn find_with_filter(
        &self,
        manager_id: Uuid,
        filter: &ProjectFilter,
    ) -> Result<Vec<project_model::Model>, DbErr> {
        let mut conditions =
            Condition::all().add(project_model::Column::ManagerId.eq(manager_id));

        // 名前の部分一致（大文字小文字を区別しない）
        if let Some(name) = filter.name.as_deref().filter(|n| !n.is_empty()) {
            conditions =
                conditions.add(Expr::col(project_model::Column::Name).ilike(like_pattern(name)));
        }

        // 開始日の範囲（両端を含む）
        if let Some(from) = filter.start_from {
            conditions = conditions.add(project_model::Column::StartDate.gte(from));
        }

        if let Some(to) = filter.start_to {
            conditions = conditions.add(project_model::Column::StartDate.lte(to));
        }

        ProjectEntity::find()
            .filter(conditions)
            .order_by_asc(project_model::Column::CreatedAt)
            .all(&self.db)
            .await
    }

    pub async fn create(&self, project: ProjectActiveModel) -> Result<project_model::Model, DbErr> {
        project.insert(&self.db).await
    }

    pub async fn update(&self, project: ProjectActiveModel) -> Result<project_model::Model, DbErr> {
        project.update(&self.db).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<u64, DbErr> {
        let result = ProjectEntity::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected)
    }
}
