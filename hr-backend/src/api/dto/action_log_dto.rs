// src/api/dto/action_log_dto.rs

use crate::domain::{action_log_model, user_model};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 操作ユーザーの表示用情報
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ActionLogUserDto {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ActionLogDto {
    pub id: Uuid,
    pub user_id: Uuid,
    /// ユーザーが削除済みの場合は null
    pub user: Option<ActionLogUserDto>,
    pub action: String,
    pub timestamp: DateTime<Utc>,
}

impl From<(action_log_model::Model, Option<user_model::Model>)> for ActionLogDto {
    fn from((log, user): (action_log_model::Model, Option<user_model::Model>)) -> Self {
        Self {
            id: log.id,
            user_id: log.user_id,
            user: user.map(|u| ActionLogUserDto {
                id: u.id,
                name: u.name,
                email: u.email,
            }),
            action: log.action,
            timestamp: log.created_at,
        }
    }
}
