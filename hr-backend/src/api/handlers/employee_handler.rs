// src/api/handlers/employee_handler.rs
use crate::api::dto::employee_dto::{
    BulkUpdateEmployeesRequest, BulkUpdateResponse, CreateEmployeeRequest, EmployeeDto,
    EmployeeSearchQuery, UpdateEmployeeRequest,
};
use crate::api::dto::MessageResponse;
use crate::api::AppState;
use crate::error::AppResult;
use crate::extractors::{JsonBody, QueryParams, ValidatedUuid};
use crate::middleware::auth::{jwt_auth_middleware, AuthenticatedUser};
use crate::types::ApiResponse;
use axum::{
    extract::State,
    http::StatusCode,
    middleware::from_fn_with_state,
    routing::{get, put},
    Router,
};
use tracing::info;

pub async fn create_employee_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    JsonBody(payload): JsonBody<CreateEmployeeRequest>,
) -> AppResult<(StatusCode, ApiResponse<EmployeeDto>)> {
    info!(user_id = %user.user_id(), "Creating employee");
    let employee = app_state.employee_service.create_employee(payload).await?;
    Ok((StatusCode::CREATED, ApiResponse::success(employee)))
}

/// 従業員一覧（?search= で姓・名・メールを部分一致検索）
pub async fn list_employees_handler(
    State(app_state): State<AppState>,
    QueryParams(query): QueryParams<EmployeeSearchQuery>,
) -> AppResult<ApiResponse<Vec<EmployeeDto>>> {
    let employees = app_state
        .employee_service
        .list_employees(query.search.as_deref())
        .await?;
    Ok(ApiResponse::success(employees))
}

pub async fn get_employee_handler(
    State(app_state): State<AppState>,
    ValidatedUuid(id): ValidatedUuid,
) -> AppResult<ApiResponse<EmployeeDto>> {
    let employee = app_state.employee_service.get_employee(id).await?;
    Ok(ApiResponse::success(employee))
}

pub async fn update_employee_handler(
    State(app_state): State<AppState>,
    ValidatedUuid(id): ValidatedUuid,
    JsonBody(payload): JsonBody<UpdateEmployeeRequest>,
) -> AppResult<ApiResponse<EmployeeDto>> {
    let employee = app_state.employee_service.update_employee(id, payload).await?;
    Ok(ApiResponse::success(employee))
}

pub async fn delete_employee_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    ValidatedUuid(id): ValidatedUuid,
) -> AppResult<ApiResponse<MessageResponse>> {
    app_state.employee_service.delete_employee(id).await?;
    info!(user_id = %user.user_id(), employee_id = %id, "Employee removed");
    Ok(ApiResponse::success(MessageResponse::new("Employee removed")))
}

pub async fn bulk_update_employees_handler(
    State(app_state): State<AppState>,
    JsonBody(payload): JsonBody<BulkUpdateEmployeesRequest>,
) -> AppResult<ApiResponse<BulkUpdateResponse>> {
    let result = app_state.employee_service.bulk_update(payload).await?;
    Ok(ApiResponse::success(result))
}

/// 従業員ルーター（認証必須）
pub fn employee_router(app_state: AppState) -> Router {
    Router::new()
        .route(
            "/api/employees",
            get(list_employees_handler).post(create_employee_handler),
        )
        // 静的セグメントは {id} より優先される
        .route("/api/employees/bulk", put(bulk_update_employees_handler))
        .route(
            "/api/employees/{id}",
            get(get_employee_handler)
                .put(update_employee_handler)
                .delete(delete_employee_handler),
        )
        .route_layer(from_fn_with_state(
            app_state.auth_middleware_config(),
            jwt_auth_middleware,
        ))
        .with_state(app_state)
}
