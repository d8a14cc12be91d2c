// src/domain/action_log_model.rs

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "action_logs")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    pub action: String,
    pub created_at: DateTime<Utc>,
}

// DB上の外部キーは無いが、結合用にリレーションを定義
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user_model::Entity",
        from = "Column::UserId",
        to = "super::user_model::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    User,
}

impl Related<super::user_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {
    fn new() -> Self {
        Self {
            id: Set(Uuid::new_v4()),
            created_at: Set(Utc::now()),
            ..ActiveModelTrait::default()
        }
    }
}

/// 監査対象の操作ラベル
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditAction {
    CreatePolicy,
    UpdatePolicy,
    DeletePolicy,
    CreateRole,
    UpdateRole,
    DeleteRole,
}

impl AuditAction {
    pub fn label(&self) -> &'static str {
        match self {
            Self::CreatePolicy => "Create Policy",
            Self::UpdatePolicy => "Update Policy",
            Self::DeletePolicy => "Delete Policy",
            Self::CreateRole => "Create Role",
            Self::UpdateRole => "Update Role",
            Self::DeleteRole => "Delete Role",
        }
    }
}
