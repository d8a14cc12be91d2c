// src/api/handlers/project_handler.rs
use crate::api::dto::performance_dto::{
    PerformanceDetailDto, PerformanceDto, RatePerformanceRequest,
};
use crate::api::dto::project_dto::{
    CreateProjectRequest, ProjectDto, ProjectFilterQuery, UpdateProjectRequest,
};
use crate::api::dto::MessageResponse;
use crate::api::AppState;
use crate::domain::user_model::UserRole;
use crate::error::AppResult;
use crate::extractors::{JsonBody, QueryParams, ValidatedUuid};
use crate::middleware::auth::{jwt_auth_middleware, AuthenticatedUser};
use crate::require_roles;
use crate::types::ApiResponse;
use axum::{
    extract::State,
    http::StatusCode,
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};

// --- プロジェクト ---

pub async fn create_project_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    JsonBody(payload): JsonBody<CreateProjectRequest>,
) -> AppResult<(StatusCode, ApiResponse<ProjectDto>)> {
    user.require_role(UserRole::Manager, "project_handler::create_project")?;

    let project = app_state
        .project_service
        .create_project(user.user_id(), payload)
        .await?;
    Ok((StatusCode::CREATED, ApiResponse::success(project)))
}

/// 自分が管理するプロジェクト一覧
pub async fn list_projects_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
) -> AppResult<ApiResponse<Vec<ProjectDto>>> {
    let projects = app_state
        .project_service
        .list_projects(user.user_id())
        .await?;
    Ok(ApiResponse::success(projects))
}

pub async fn filter_projects_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    QueryParams(query): QueryParams<ProjectFilterQuery>,
) -> AppResult<ApiResponse<Vec<ProjectDto>>> {
    let projects = app_state
        .project_service
        .filter_projects(user.user_id(), query)
        .await?;
    Ok(ApiResponse::success(projects))
}

pub async fn get_project_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    ValidatedUuid(id): ValidatedUuid,
) -> AppResult<ApiResponse<ProjectDto>> {
    let project = app_state
        .project_service
        .get_project(user.user_id(), id)
        .await?;
    Ok(ApiResponse::success(project))
}

pub async fn update_project_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    ValidatedUuid(id): ValidatedUuid,
    JsonBody(payload): JsonBody<UpdateProjectRequest>,
) -> AppResult<ApiResponse<ProjectDto>> {
    let project = app_state
        .project_service
        .update_project(user.user_id(), id, payload)
        .await?;
    Ok(ApiResponse::success(project))
}

pub async fn delete_project_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    ValidatedUuid(id): ValidatedUuid,
) -> AppResult<ApiResponse<MessageResponse>> {
    app_state
        .project_service
        .delete_project(user.user_id(), id)
        .await?;
    Ok(ApiResponse::success(MessageResponse::new(
        "Project deleted successfully",
    )))
}

// --- 評価 ---

pub async fn rate_performance_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    JsonBody(payload): JsonBody<RatePerformanceRequest>,
) -> AppResult<(StatusCode, ApiResponse<PerformanceDto>)> {
    let performance = app_state
        .performance_service
        .rate_employee(user.user_id(), payload)
        .await?;
    Ok((StatusCode::CREATED, ApiResponse::success(performance)))
}

/// パスのIDは従業員ID
pub async fn get_employee_performance_handler(
    State(app_state): State<AppState>,
    ValidatedUuid(employee_id): ValidatedUuid,
) -> AppResult<ApiResponse<Vec<PerformanceDetailDto>>> {
    let performances = app_state
        .performance_service
        .get_employee_performance(employee_id)
        .await?;
    Ok(ApiResponse::success(performances))
}

/// プロジェクトルーター。マウント全体に manager ロールを要求する
pub fn project_router(app_state: AppState) -> Router {
    Router::new()
        .route(
            "/api/project",
            get(list_projects_handler).post(create_project_handler),
        )
        .route("/api/project/filter", get(filter_projects_handler))
        .route(
            "/api/project/performance/rating",
            post(rate_performance_handler)
                .route_layer(require_roles!(UserRole::Manager, UserRole::Admin)),
        )
        .route(
            "/api/project/performance/{employee_id}",
            get(get_employee_performance_handler),
        )
        .route(
            "/api/project/{id}",
            get(get_project_handler)
                .put(update_project_handler)
                .delete(delete_project_handler),
        )
        .route_layer(require_roles!(UserRole::Manager))
        .route_layer(from_fn_with_state(
            app_state.auth_middleware_config(),
            jwt_auth_middleware,
        ))
        .with_state(app_state)
}
