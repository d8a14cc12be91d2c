// tests/integration/access_control_tests.rs

use axum::http::{Method, StatusCode};

use crate::common::app_helper::setup_app;
use crate::common::auth_helper::{create_admin, create_employee_user, create_manager};
use crate::common::request::{get, json_request, send};

#[tokio::test]
async fn test_health_is_public() {
    let (app, _db) = setup_app().await;

    let (status, body) = send(&app, json_request(Method::GET, "/health", None, None)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_missing_token_is_unauthorized() {
    let (app, _db) = setup_app().await;

    for uri in ["/api/employees", "/api/project", "/api/metrics", "/api/policies", "/api/logs"] {
        let (status, body) = send(&app, json_request(Method::GET, uri, None, None)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "uri: {}", uri);
        assert_eq!(body["message"], "Not authorized, no token");
    }
}

#[tokio::test]
async fn test_invalid_token_is_unauthorized() {
    let (app, _db) = setup_app().await;

    let (status, body) = get(&app, "/api/employees", "not-a-jwt").await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Not authorized, token failed");
}

#[tokio::test]
async fn test_project_routes_require_manager() {
    let (app, _db) = setup_app().await;
    let employee = create_employee_user(&app).await;
    let manager = create_manager(&app).await;

    let (status, _) = get(&app, "/api/project", &employee.token).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = get(&app, "/api/project", &manager.token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], serde_json::json!([]));
}

#[tokio::test]
async fn test_logs_require_admin() {
    let (app, _db) = setup_app().await;
    let manager = create_manager(&app).await;
    let admin = create_admin(&app).await;

    let (status, _) = get(&app, "/api/logs", &manager.token).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = get(&app, "/api/logs", &admin.token).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["data"].is_array());
}
