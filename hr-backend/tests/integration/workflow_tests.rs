// tests/integration/workflow_tests.rs

use axum::http::StatusCode;
use serde_json::json;

use crate::common::app_helper::setup_app;
use crate::common::auth_helper::{login, register, register_payload, TEST_PASSWORD};
use crate::common::request::{delete, get, post};
use crate::common::test_data::project_payload;

/// 登録からプロジェクト削除までの一連の流れ
#[tokio::test]
async fn test_manager_project_workflow() {
    let (app, _db) = setup_app().await;

    let payload = register_payload("manager");
    let (status, _) = register(&app, payload.clone()).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = login(&app, payload["email"].as_str().unwrap(), TEST_PASSWORD).await;
    assert_eq!(status, StatusCode::OK);
    let token = body["data"]["token"].as_str().unwrap().to_string();

    let (status, body) = post(&app, "/api/project", &token, project_payload("Orbit", &[])).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["teamMembers"], json!([]));
    assert_eq!(body["data"]["metrics"]["progress"], 0.0);
    let id = body["data"]["id"].as_str().unwrap().to_string();

    let (status, body) = get(&app, "/api/project", &token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    let uri = format!("/api/project/{}", id);
    let (status, body) = delete(&app, &uri, &token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["message"], "Project deleted successfully");

    let (status, _) = get(&app, &uri, &token).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
