// src/service/action_log_service.rs

use crate::api::dto::action_log_dto::ActionLogDto;
use crate::db::DbPool;
use crate::domain::action_log_model::AuditAction;
use crate::error::AppResult;
use crate::repository::action_log_repository::ActionLogRepository;
use std::sync::Arc;
use tracing::{debug, error};
use uuid::Uuid;

pub struct ActionLogService {
    repo: Arc<ActionLogRepository>,
}

impl ActionLogService {
    pub fn new(db_pool: DbPool) -> Self {
        Self {
            repo: Arc::new(ActionLogRepository::new(db_pool)),
        }
    }

    /// 操作を1件記録する。失敗してもリクエストは失敗させずログに残すだけ
    pub async fn record(&self, user_id: Uuid, action: AuditAction) {
        match self.repo.create(user_id, action.label()).await {
            Ok(log) => debug!(log_id = %log.id, action = %log.action, "Action logged"),
            Err(e) => error!(
                user_id = %user_id,
                action = action.label(),
                error = %e,
                "Failed to record action log"
            ),
        }
    }

    /// 全件を古い順に（操作ユーザー解決済み）
    pub async fn list_all(&self) -> AppResult<Vec<ActionLogDto>> {
        let rows = self.repo.find_all_with_user().await?;
        Ok(rows.into_iter().map(ActionLogDto::from).collect())
    }
}
