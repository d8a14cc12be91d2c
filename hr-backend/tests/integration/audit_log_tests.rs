// tests/integration/audit_log_tests.rs

use axum::http::StatusCode;
use serde_json::json;

use crate::common::app_helper::setup_app;
use crate::common::auth_helper::{create_admin, create_manager};
use crate::common::request::{delete, get, post, put};
use crate::common::test_data::{create_employee, create_project};

#[tokio::test]
async fn test_policy_and_role_mutations_are_audited() {
    let (app, _db) = setup_app().await;
    let admin = create_admin(&app).await;

    let (status, body) = post(
        &app,
        "/api/policies",
        &admin.token,
        json!({ "name": "Remote work", "description": "WFH rules", "value": "2 days" }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let policy_id = body["data"]["id"].as_str().unwrap().to_string();

    let (status, _) = put(
        &app,
        &format!("/api/policies/{}", policy_id),
        &admin.token,
        json!({ "value": "3 days" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = post(
        &app,
        "/api/roles",
        &admin.token,
        json!({ "roleName": "auditor", "permissions": ["read:logs"] }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let role_id = body["data"]["id"].as_str().unwrap().to_string();

    let (status, body) = delete(&app, &format!("/api/roles/{}", role_id), &admin.token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["message"], "Role deleted successfully");

    // 読み取りと従業員・プロジェクトの変更は記録されない
    get(&app, "/api/policies", &admin.token).await;
    let employee = create_employee(&app, &admin.token, "Claude", "Shannon", None).await;
    let (status, _) = put(
        &app,
        &format!("/api/employees/{}", employee),
        &admin.token,
        json!({ "position": "Researcher" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = delete(&app, &format!("/api/employees/{}", employee), &admin.token).await;
    assert_eq!(status, StatusCode::OK);

    let manager = create_manager(&app).await;
    let project = create_project(&app, &manager.token, "Information Theory", &[]).await;
    let project_uri = format!("/api/project/{}", project);
    let (status, _) = put(
        &app,
        &project_uri,
        &manager.token,
        json!({ "status": "in progress" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = delete(&app, &project_uri, &manager.token).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = get(&app, "/api/logs", &admin.token).await;
    assert_eq!(status, StatusCode::OK);
    let logs = body["data"].as_array().unwrap();

    let mut actions: Vec<&str> = logs.iter().map(|l| l["action"].as_str().unwrap()).collect();
    actions.sort();
    assert_eq!(
        actions,
        vec!["Create Policy", "Create Role", "Delete Role", "Update Policy"]
    );

    for log in logs {
        assert_eq!(log["userId"], admin.id.to_string());
        assert_eq!(log["user"]["name"], admin.name.as_str());
        assert_eq!(log["user"]["email"], admin.email.as_str());
    }
}

#[tokio::test]
async fn test_deleting_missing_policy_is_not_found() {
    let (app, _db) = setup_app().await;
    let admin = create_admin(&app).await;

    let (status, body) = delete(
        &app,
        &format!("/api/policies/{}", uuid::Uuid::new_v4()),
        &admin.token,
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Policy not found");
}
