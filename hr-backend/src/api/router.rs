// src/api/router.rs
use crate::api::handlers::{
    action_log_handler::action_log_router, auth_handler::auth_router,
    employee_handler::employee_router, metrics_handler::metrics_router,
    policy_handler::policy_router, project_handler::project_router, role_handler::role_router,
};
use crate::api::AppState;
use crate::logging::{inject_request_context, logging_middleware};
use axum::{
    http::{header, HeaderValue, Method},
    middleware,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use std::time::Duration;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::warn;

async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// CORS ミドルウェア設定
pub fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT])
        .max_age(Duration::from_secs(3600))
}

/// 全ルーターを統合し、共通ミドルウェアを適用する
pub fn app_router(app_state: AppState) -> Router {
    let config = app_state.config.clone();

    Router::new()
        .route("/health", get(health_handler))
        .merge(auth_router(app_state.clone()))
        .merge(employee_router(app_state.clone()))
        .merge(project_router(app_state.clone()))
        .merge(metrics_router(app_state.clone()))
        .merge(policy_router(app_state.clone()))
        .merge(role_router(app_state.clone()))
        .merge(action_log_router(app_state))
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(inject_request_context))
        .layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout_secs)))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.cors_allowed_origins))
}
