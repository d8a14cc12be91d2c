// src/api/handlers/metrics_handler.rs
use crate::api::dto::metrics_dto::{
    CompanyMetricsDto, CreateProjectMetricsRequest, DepartmentTurnoverDto,
    ProjectMetricsRecordDto, UpdateProjectMetricsRequest,
};
use crate::api::dto::MessageResponse;
use crate::api::AppState;
use crate::error::AppResult;
use crate::extractors::{JsonBody, ValidatedUuid};
use crate::middleware::auth::{jwt_auth_middleware, AuthenticatedUser};
use crate::types::ApiResponse;
use axum::{
    extract::State, http::StatusCode, middleware::from_fn_with_state, routing::get, Router,
};
use tracing::info;

// --- 会社全体 ---

pub async fn get_company_metrics_handler(
    State(app_state): State<AppState>,
) -> AppResult<ApiResponse<CompanyMetricsDto>> {
    let snapshot = app_state.metrics_service.get_company_snapshot().await?;
    Ok(ApiResponse::success(snapshot))
}

/// 従業員データから会社全体メトリクスを再集計する
pub async fn refresh_company_metrics_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
) -> AppResult<ApiResponse<CompanyMetricsDto>> {
    info!(user_id = %user.user_id(), "Refreshing company metrics");
    let snapshot = app_state.metrics_service.refresh_company_snapshot().await?;
    Ok(ApiResponse::success(snapshot))
}

pub async fn turnover_by_department_handler(
    State(app_state): State<AppState>,
) -> AppResult<ApiResponse<DepartmentTurnoverDto>> {
    let entries = app_state.metrics_service.turnover_by_department().await?;
    Ok(ApiResponse::success(entries))
}

// --- プロジェクト単位 ---

pub async fn create_project_metrics_handler(
    State(app_state): State<AppState>,
    JsonBody(payload): JsonBody<CreateProjectMetricsRequest>,
) -> AppResult<(StatusCode, ApiResponse<ProjectMetricsRecordDto>)> {
    let metrics = app_state
        .metrics_service
        .create_project_metrics(payload)
        .await?;
    Ok((StatusCode::CREATED, ApiResponse::success(metrics)))
}

/// パスのIDはプロジェクトID
pub async fn get_project_metrics_handler(
    State(app_state): State<AppState>,
    ValidatedUuid(project_id): ValidatedUuid,
) -> AppResult<ApiResponse<ProjectMetricsRecordDto>> {
    let metrics = app_state
        .metrics_service
        .get_project_metrics(project_id)
        .await?;
    Ok(ApiResponse::success(metrics))
}

/// パスのIDはメトリクスレコードのID
pub async fn update_project_metrics_handler(
    State(app_state): State<AppState>,
    ValidatedUuid(id): ValidatedUuid,
    JsonBody(payload): JsonBody<UpdateProjectMetricsRequest>,
) -> AppResult<ApiResponse<ProjectMetricsRecordDto>> {
    let metrics = app_state
        .metrics_service
        .update_project_metrics(id, payload)
        .await?;
    Ok(ApiResponse::success(metrics))
}

pub async fn delete_project_metrics_handler(
    State(app_state): State<AppState>,
    ValidatedUuid(id): ValidatedUuid,
) -> AppResult<ApiResponse<MessageResponse>> {
    app_state.metrics_service.delete_project_metrics(id).await?;
    Ok(ApiResponse::success(MessageResponse::new(
        "Metrics deleted successfully",
    )))
}

/// メトリクスルーター（認証必須）
pub fn metrics_router(app_state: AppState) -> Router {
    Router::new()
        .route(
            "/api/metrics",
            get(get_company_metrics_handler)
                .put(refresh_company_metrics_handler)
                .post(create_project_metrics_handler),
        )
        .route(
            "/api/metrics/turnover-by-department",
            get(turnover_by_department_handler),
        )
        .route(
            "/api/metrics/{id}",
            get(get_project_metrics_handler)
                .put(update_project_metrics_handler)
                .delete(delete_project_metrics_handler),
        )
        .route_layer(from_fn_with_state(
            app_state.auth_middleware_config(),
            jwt_auth_middleware,
        ))
        .with_state(app_state)
}
