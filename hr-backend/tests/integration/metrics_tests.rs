// tests/integration/metrics_tests.rs

use axum::http::StatusCode;
use serde_json::json;

use crate::common::app_helper::setup_app;
use crate::common::auth_helper::create_manager;
use crate::common::request::{delete, get, post, put};
use crate::common::test_data::{create_employee, create_project};

#[tokio::test]
async fn test_company_metrics_missing_before_refresh() {
    let (app, _db) = setup_app().await;
    let user = create_manager(&app).await;

    let (status, body) = get(&app, "/api/metrics", &user.token).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Metrics not found");
}

#[tokio::test]
async fn test_refresh_counts_departments_and_is_idempotent() {
    let (app, _db) = setup_app().await;
    let user = create_manager(&app).await;

    create_employee(&app, &user.token, "Ada", "Lovelace", Some("Engineering")).await;
    create_employee(&app, &user.token, "Alan", "Turing", Some("Engineering")).await;
    create_employee(&app, &user.token, "Joan", "Clarke", None).await;

    let (status, first) = put(&app, "/api/metrics", &user.token, json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["data"]["totalEmployees"], 3);
    assert_eq!(first["data"]["turnoverRate"], 5.0);
    assert_eq!(first["data"]["employeeEngagement"], 75.0);
    assert_eq!(first["data"]["turnoverByDepartment"]["Engineering"], 2);
    assert_eq!(first["data"]["turnoverByDepartment"]["unassigned"], 1);

    let (status, second) = put(&app, "/api/metrics", &user.token, json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(second["data"]["totalEmployees"], first["data"]["totalEmployees"]);
    assert_eq!(
        second["data"]["turnoverByDepartment"],
        first["data"]["turnoverByDepartment"]
    );

    let (status, stored) = get(&app, "/api/metrics", &user.token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stored["data"]["totalEmployees"], 3);
}

#[tokio::test]
async fn test_turnover_counts_only_departed_employees() {
    let (app, _db) = setup_app().await;
    let user = create_manager(&app).await;

    let leaver = create_employee(&app, &user.token, "Grace", "Hopper", Some("Navy")).await;
    create_employee(&app, &user.token, "Jean", "Sammet", Some("Navy")).await;

    let (status, _) = put(
        &app,
        &format!("/api/employees/{}", leaver),
        &user.token,
        json!({ "isEmployed": false }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = get(&app, "/api/metrics/turnover-by-department", &user.token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], json!({ "Navy": 1 }));
}

#[tokio::test]
async fn test_project_metrics_lifecycle() {
    let (app, _db) = setup_app().await;
    let manager = create_manager(&app).await;
    let project = create_project(&app, &manager.token, "Skylab", &[]).await;

    let (status, body) = get(&app, &format!("/api/metrics/{}", project), &manager.token).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Metrics not found for this project");

    let (status, body) = post(
        &app,
        "/api/metrics",
        &manager.token,
        json!({
            "project": project,
            "progress": 20,
            "budget": 1000,
            "deadlinesMet": 1,
            "issues": ["scope creep"]
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let record_id = body["data"]["id"].as_str().unwrap().to_string();

    let (status, body) = get(&app, &format!("/api/metrics/{}", project), &manager.token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["issues"], json!(["scope creep"]));

    let (status, body) = put(
        &app,
        &format!("/api/metrics/{}", record_id),
        &manager.token,
        json!({ "progress": 60, "budget": 0 }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["progress"], 60.0);
    assert_eq!(body["data"]["budget"], 1000.0);

    let uri = format!("/api/metrics/{}", record_id);
    let (status, body) = delete(&app, &uri, &manager.token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["message"], "Metrics deleted successfully");

    let (status, _) = delete(&app, &uri, &manager.token).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_project_metrics_survive_project_deletion() {
    let (app, _db) = setup_app().await;
    let manager = create_manager(&app).await;
    let project = create_project(&app, &manager.token, "Vanguard", &[]).await;

    let (status, _) = post(
        &app,
        "/api/metrics",
        &manager.token,
        json!({ "projectId": project, "progress": 10, "budget": 500, "deadlinesMet": 0 }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = delete(&app, &format!("/api/project/{}", project), &manager.token).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = get(&app, &format!("/api/metrics/{}", project), &manager.token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["projectId"], project.to_string());
    assert_eq!(body["data"]["issues"], json!([]));
}
