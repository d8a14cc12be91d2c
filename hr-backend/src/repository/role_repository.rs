// src/repository/role_repository.rs
use crate::domain::role_model::{self, ActiveModel as RoleActiveModel, Entity as RoleEntity};
use sea_orm::{entity::*, query::*, DbConn, DbErr};
use uuid::Uuid;

#[derive(Clone)]
pub struct RoleRepository {
    db: DbConn,
}

impl RoleRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<role_model::Model>, DbErr> {
        RoleEntity::find_by_id(id).one(&self.db).await
    }

    pub async fn find_all(&self) -> Result<Vec<role_model::Model>, DbErr> {
        RoleEntity::find()
            .order_by_asc(role_model::Column::CreatedAt)
            .all(&self.db)
            .await
    }

    pub async fn create(&self, role: RoleActiveModel) -> Result<role_model::Model, DbErr> {
        role.insert(&self.db).await
    }

    pub async fn update(&self, role: RoleActiveModel) -> Result<role_model::Model, DbErr> {
        role.update(&self.db).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<u64, DbErr> {
        let result = RoleEntity::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected)
    }
}
