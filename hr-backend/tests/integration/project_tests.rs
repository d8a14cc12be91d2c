// tests/integration/project_tests.rs

use axum::http::StatusCode;
use serde_json::json;
use uuid::Uuid;

use crate::common::app_helper::setup_app;
use crate::common::auth_helper::create_manager;
use crate::common::request::{delete, get, post, put};
use crate::common::test_data::{create_employee, create_project, project_payload};

#[tokio::test]
async fn test_create_project_resolves_team_members() {
    let (app, _db) = setup_app().await;
    let manager = create_manager(&app).await;
    let member = create_employee(&app, &manager.token, "Margaret", "Hamilton", None).await;

    let (status, body) = post(
        &app,
        "/api/project",
        &manager.token,
        project_payload("Apollo", &[member]),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    let data = &body["data"];
    assert_eq!(data["name"], "Apollo");
    assert_eq!(data["manager"], manager.id.to_string());
    assert_eq!(data["status"], "not started");
    assert_eq!(data["teamMembers"][0]["id"], member.to_string());
    assert_eq!(data["teamMembers"][0]["name"], "Margaret Hamilton");
}

#[tokio::test]
async fn test_project_name_is_unique_per_manager_only() {
    let (app, _db) = setup_app().await;
    let first = create_manager(&app).await;
    let second = create_manager(&app).await;

    create_project(&app, &first.token, "Shared Name", &[]).await;

    let (status, body) = post(
        &app,
        "/api/project",
        &first.token,
        project_payload("Shared Name", &[]),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        "Project with this name already exists under your management"
    );

    let (status, _) = post(
        &app,
        "/api/project",
        &second.token,
        project_payload("Shared Name", &[]),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_end_before_start_is_rejected() {
    let (app, _db) = setup_app().await;
    let manager = create_manager(&app).await;

    let mut payload = project_payload("Backwards", &[]);
    payload["startDate"] = json!("2024-06-01");
    payload["endDate"] = json!("2024-01-01");

    let (status, _) = post(&app, "/api/project", &manager.token, payload).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_foreign_project_is_not_found() {
    let (app, _db) = setup_app().await;
    let owner = create_manager(&app).await;
    let other = create_manager(&app).await;
    let id = create_project(&app, &owner.token, "Private", &[]).await;
    let uri = format!("/api/project/{}", id);

    let (status, body) = get(&app, &uri, &other.token).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Project not found");

    let (status, _) = delete(&app, &uri, &other.token).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = get(&app, &uri, &owner.token).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_list_only_returns_own_projects() {
    let (app, _db) = setup_app().await;
    let owner = create_manager(&app).await;
    let other = create_manager(&app).await;
    create_project(&app, &owner.token, "Mine", &[]).await;
    create_project(&app, &other.token, "Theirs", &[]).await;

    let (status, body) = get(&app, "/api/project", &owner.token).await;
    assert_eq!(status, StatusCode::OK);
    let projects = body["data"].as_array().unwrap();
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0]["name"], "Mine");
}

#[tokio::test]
async fn test_update_project_patches_metrics_and_status() {
    let (app, _db) = setup_app().await;
    let manager = create_manager(&app).await;
    let id = create_project(&app, &manager.token, "Gemini", &[]).await;

    let (status, body) = put(
        &app,
        &format!("/api/project/{}", id),
        &manager.token,
        json!({
            "description": "",
            "metrics": { "progress": 40 },
            "status": "completed"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["description"], "Gemini description");
    assert_eq!(body["data"]["metrics"]["progress"], 40.0);
    assert_eq!(body["data"]["status"], "completed");
}

#[tokio::test]
async fn test_filter_by_name_and_team_member() {
    let (app, _db) = setup_app().await;
    let manager = create_manager(&app).await;
    let member = create_employee(&app, &manager.token, "Katherine", "Johnson", None).await;

    create_project(&app, &manager.token, "Mercury", &[member]).await;
    create_project(&app, &manager.token, "Voyager", &[]).await;

    let (status, body) = get(&app, "/api/project/filter?name=merc", &manager.token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
    assert_eq!(body["data"][0]["name"], "Mercury");

    let uri = format!("/api/project/filter?teamMemberId={}", member);
    let (status, body) = get(&app, &uri, &manager.token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    let uri = format!("/api/project/filter?teamMemberId={}", Uuid::new_v4());
    let (status, body) = get(&app, &uri, &manager.token).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "No projects found");
}

#[tokio::test]
async fn test_rate_and_lookup_performance() {
    let (app, _db) = setup_app().await;
    let manager = create_manager(&app).await;
    let employee = create_employee(&app, &manager.token, "Frances", "Allen", None).await;
    let project = create_project(&app, &manager.token, "Compiler", &[employee]).await;

    let (status, body) = post(
        &app,
        "/api/project/performance/rating",
        &manager.token,
        json!({
            "employeeId": employee,
            "projectId": project,
            "rating": 5,
            "feedback": "Excellent work"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["rating"], 5);

    let (status, body) = get(
        &app,
        &format!("/api/project/performance/{}", employee),
        &manager.token,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let entries = body["data"].as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["project"]["name"], "Compiler");
    assert_eq!(entries[0]["employee"]["firstName"], "Frances");
}

#[tokio::test]
async fn test_rating_out_of_range_or_unknown_employee_is_rejected() {
    let (app, _db) = setup_app().await;
    let manager = create_manager(&app).await;
    let employee = create_employee(&app, &manager.token, "John", "Backus", None).await;
    let project = create_project(&app, &manager.token, "Fortran", &[]).await;

    let (status, _) = post(
        &app,
        "/api/project/performance/rating",
        &manager.token,
        json!({ "employeeId": employee, "projectId": project, "rating": 11, "feedback": "x" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = post(
        &app,
        "/api/project/performance/rating",
        &manager.token,
        json!({ "employeeId": Uuid::new_v4(), "projectId": project, "rating": 3, "feedback": "x" }),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_ratings_survive_employee_and_project_deletion() {
    let (app, _db) = setup_app().await;
    let manager = create_manager(&app).await;
    let employee = create_employee(&app, &manager.token, "Niklaus", "Wirth", None).await;
    let project = create_project(&app, &manager.token, "Pascal", &[employee]).await;

    let (status, _) = post(
        &app,
        "/api/project/performance/rating",
        &manager.token,
        json!({ "employeeId": employee, "projectId": project, "rating": 8, "feedback": "Solid" }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = delete(&app, &format!("/api/employees/{}", employee), &manager.token).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = delete(&app, &format!("/api/project/{}", project), &manager.token).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = get(
        &app,
        &format!("/api/project/performance/{}", employee),
        &manager.token,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let entries = body["data"].as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["rating"], 8);
    assert_eq!(entries[0]["feedback"], "Solid");
    assert!(entries[0]["employee"].is_null());
    assert!(entries[0]["project"].is_null());
}

#[tokio::test]
async fn test_update_rejects_end_date_before_existing_start() {
    let (app, _db) = setup_app().await;
    let manager = create_manager(&app).await;
    let id = create_project(&app, &manager.token, "Ranger", &[]).await;
    let uri = format!("/api/project/{}", id);

    let (status, body) = put(&app, &uri, &manager.token, json!({ "endDate": "2023-06-01" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["validationErrors"]["end_date"][0],
        "End date must not be before start date"
    );

    let (_, body) = get(&app, &uri, &manager.token).await;
    assert_eq!(body["data"]["endDate"], "2024-12-31T00:00:00Z");
}
