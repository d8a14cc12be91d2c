// src/api/handlers/role_handler.rs
use crate::api::dto::role_dto::{CreateRoleRequest, RoleDto, UpdateRoleRequest};
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

pub async fn list_roles_handler(
    State(app_state): State<AppState>,
) -> AppResult<ApiResponse<Vec<RoleDto>>> {
    let roles = app_state.role_service.list_roles().await?;
    Ok(ApiResponse::success(roles))
}

pub async fn create_role_handler(
    State(app_state): State<AppState>,
    JsonBody(payload): JsonBody<CreateRoleRequest>,
) -> AppResult<(StatusCode, ApiResponse<RoleDto>)> {
    let role = app_state.role_service.create_role(payload).await?;
    Ok((StatusCode::CREATED, ApiResponse::success(role)))
}

pub async fn update_role_handler(
    State(app_state): State<AppState>,
    ValidatedUuid(id): ValidatedUuid,
    JsonBody(payload): JsonBody<UpdateRoleRequest>,
) -> AppResult<ApiResponse<RoleDto>> {
    let role = app_state.role_service.update_role(id, payload).await?;
    Ok(ApiResponse::success(role))
}

pub async fn delete_role_handler(
    State(app_state): State<AppState>,
    ValidatedUuid(id): ValidatedUuid,
) -> AppResult<ApiResponse<MessageResponse>> {
    app_state.role_service.delete_role(id).await?;
    Ok(ApiResponse::success(MessageResponse::new(
        "Role deleted successfully",
    )))
}

/// ロールルーター（認証必須、変更操作は監査ログに記録）
pub fn role_router(app_state: AppState) -> Router {
    Router::new()
        .route("/api/roles", get(list_roles_handler).post(create_role_handler))
        .route(
            "/api/roles/{id}",
            put(update_role_handler).delete(delete_role_handler),
        )
        .route_layer(from_fn_with_state(app_state.action_logger(), log_action))
        .route_layer(from_fn_with_state(
            app_state.auth_middleware_config(),
            jwt_auth_middleware,
        ))
        .with_state(app_state)
}
