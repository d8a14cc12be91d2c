// src/api/handlers/auth_handler.rs
use crate::api::dto::auth_dto::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};
use crate::api::AppState;
use crate::error::AppResult;
use crate::extractors::JsonBody;
use crate::types::ApiResponse;
use axum::{extract::State, http::StatusCode, routing::post, Router};

/// ユーザー登録（201、トークンなし）
pub async fn register_handler(
    State(app_state): State<AppState>,
    JsonBody(payload): JsonBody<RegisterRequest>,
) -> AppResult<(StatusCode, ApiResponse<RegisterResponse>)> {
    let user = app_state.auth_service.register(payload).await?;
    Ok((StatusCode::CREATED, ApiResponse::success(user)))
}

/// ログイン
pub async fn login_handler(
    State(app_state): State<AppState>,
    JsonBody(payload): JsonBody<LoginRequest>,
) -> AppResult<ApiResponse<LoginResponse>> {
    let response = app_state.auth_service.login(payload).await?;
    Ok(ApiResponse::success(response))
}

/// 認証ルーター（公開）
pub fn auth_router(app_state: AppState) -> Router {
    Router::new()
        .route("/api/auth/register", post(register_handler))
        .route("/api/auth/login", post(login_handler))
        .with_state(app_state)
}
