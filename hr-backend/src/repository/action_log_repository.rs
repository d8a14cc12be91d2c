// src/repository/action_log_repository.rs
use crate::domain::action_log_model::{
    self, ActiveModel as ActionLogActiveModel, Entity as ActionLogEntity,
};
use crate::domain::user_model;
use sea_orm::{entity::*, query::*, DbConn, DbErr, Set};
use uuid::Uuid;

#[derive(Clone)]
pub struct ActionLogRepository {
    db: DbConn,
}

impl ActionLogRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        user_id: Uuid,
        action: &str,
    ) -> Result<action_log_model::Model, DbErr> {
        let log = ActionLogActiveModel {
            user_id: Set(user_id),
            action: Set(action.to_string()),
            ..ActionLogActiveModel::new()
        };
        log.insert(&self.db).await
    }

    /// 全件を古い順に取得し、操作ユーザーを左外部結合で解決する
    pub async fn find_all_with_user(
        &self,
    ) -> Result<Vec<(action_log_model::Model, Option<user_model::Model>)>, DbErr> {
        ActionLogEntity::find()
            .find_also_related(user_model::Entity)
            .order_by_asc(action_log_model::Column::CreatedAt)
            .all(&self.db)
            .await
    }
}
