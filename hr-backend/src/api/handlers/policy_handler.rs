// src/api/handlers/policy_handler.rs
use crate::api::dto::policy_dto::{CreatePolicyRequest, PolicyDto, UpdatePolicyRequest};
use crate::api::dto::MessageResponse;
use crate::api::AppState;
use crate::error::AppResult;
use crate::extractors::{JsonBody, ValidatedUuid};
use crate::middleware::action_logger::log_action;
use crate::middleware::auth::jwt_auth_middleware;
use crate::types::ApiResponse;
use axum::{
    extract::State,
    http::StatusCode,
    middleware::from_fn_with_state,
    routing::{get, put},
    Router,
};

pub async fn list_policies_handler(
    State(app_state): State<AppState>,
) -> AppResult<ApiResponse<Vec<PolicyDto>>> {
    let policies = app_state.policy_service.list_policies().await?;
    Ok(ApiResponse::success(policies))
}

pub async fn create_policy_handler(
    State(app_state): State<AppState>,
    JsonBody(payload): JsonBody<CreatePolicyRequest>,
) -> AppResult<(StatusCode, ApiResponse<PolicyDto>)> {
    let policy = app_state.policy_service.create_policy(payload).await?;
    Ok((StatusCode::CREATED, ApiResponse::success(policy)))
}

pub async fn update_policy_handler(
    State(app_state): State<AppState>,
    ValidatedUuid(id): ValidatedUuid,
    JsonBody(payload): JsonBody<UpdatePolicyRequest>,
) -> AppResult<ApiResponse<PolicyDto>> {
    let policy = app_state.policy_service.update_policy(id, payload).await?;
    Ok(ApiResponse::success(policy))
}

pub async fn delete_policy_handler(
    State(app_state): State<AppState>,
    ValidatedUuid(id): ValidatedUuid,
) -> AppResult<ApiResponse<MessageResponse>> {
    app_state.policy_service.delete_policy(id).await?;
    Ok(ApiResponse::success(MessageResponse::new(
        "Policy deleted successfully",
    )))
}

/// ポリシールーター（認証必須、変更操作は監査ログに記録）
pub fn policy_router(app_state: AppState) -> Router {
    Router::new()
        .route(
            "/api/policies",
            get(list_policies_handler).post(create_policy_handler),
        )
        .route(
            "/api/policies/{id}",
            put(update_policy_handler).delete(delete_policy_handler),
        )
        // 後から追加した層が外側になる: 認証 → 監査ログ → ハンドラー
        .route_layer(from_fn_with_state(app_state.action_logger(), log_action))
        .route_layer(from_fn_with_state(
            app_state.auth_middleware_config(),
            jwt_auth_middleware,
        ))
        .with_state(app_state)
}
