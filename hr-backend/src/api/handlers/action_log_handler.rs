// src/api/handlers/action_log_handler.rs
use crate::api::dto::action_log_dto::ActionLogDto;
use crate::api::AppState;
use crate::domain::user_model::UserRole;
use crate::error::AppResult;
use crate::middleware::auth::{jwt_auth_middleware, AuthenticatedUser};
use crate::require_roles;
use crate::types::ApiResponse;
use axum::{extract::State, middleware::from_fn_with_state, routing::get, Router};
use tracing::info;

/// 監査ログ全件（古い順）
pub async fn list_action_logs_handler(
    State(app_state): State<AppState>,
    admin: AuthenticatedUser,
) -> AppResult<ApiResponse<Vec<ActionLogDto>>> {
    let logs = app_state.action_log_service.list_all().await?;
    info!(admin_id = %admin.user_id(), count = logs.len(), "Action logs retrieved");
    Ok(ApiResponse::success(logs))
}

/// 監査ログルーター（admin のみ）
pub fn action_log_router(app_state: AppState) -> Router {
    Router::new()
        .route("/api/logs", get(list_action_logs_handler))
        .route_layer(require_roles!(UserRole::Admin))
        .route_layer(from_fn_with_state(
            app_state.auth_middleware_config(),
            jwt_auth_middleware,
        ))
        .with_state(app_state)
}
