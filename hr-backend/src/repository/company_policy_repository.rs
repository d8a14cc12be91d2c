// src/repository/company_policy_repository.rs
use crate::domain::company_policy_model::{
    self, ActiveModel as PolicyActiveModel, Entity as PolicyEntity,
};
use sea_orm::{entity::*, query::*, DbConn, DbErr};
use uuid::Uuid;

#[derive(Clone)]
pub struct CompanyPolicyRepository {
    db: DbConn,
}

impl CompanyPolicyRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<company_policy_model::Model>, DbErr> {
        PolicyEntity::find_by_id(id).one(&self.db).await
    }

    /// 新しい順
    pub async fn find_all(&self) -> Result<Vec<company_policy_model::Model>, DbErr> {
        PolicyEntity::find()
            .order_by_desc(company_policy_model::Column::CreatedAt)
            .all(&self.db)
            .await
    }

    pub async fn create(
        &self,
        policy: PolicyActiveModel,
    ) -> Result<company_policy_model::Model, DbErr> {
        policy.insert(&self.db).await
    }

    pub async fn update(
        &self,
        policy: PolicyActiveModel,
    ) -> Result<company_policy_model::Model, DbErr> {
        policy.update(&self.db).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<u64, DbErr> {
        let result = PolicyEntity::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected)
    }
}
