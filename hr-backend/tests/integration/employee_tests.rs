// tests/integration/employee_tests.rs

use axum::http::StatusCode;
use serde_json::json;
use uuid::Uuid;

use crate::common::app_helper::setup_app;
use crate::common::auth_helper::create_employee_user;
use crate::common::request::{delete, get, post, put};
use crate::common::test_data::{create_employee, employee_payload};

#[tokio::test]
async fn test_create_and_get_employee() {
    let (app, _db) = setup_app().await;
    let user = create_employee_user(&app).await;

    let id = create_employee(&app, &user.token, "Ada", "Lovelace", Some("Engineering")).await;

    let (status, body) = get(&app, &format!("/api/employees/{}", id), &user.token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["firstName"], "Ada");
    assert_eq!(body["data"]["department"], "Engineering");
    assert_eq!(body["data"]["isEmployed"], true);
}

#[tokio::test]
async fn test_create_employee_with_duplicate_email_conflicts() {
    let (app, _db) = setup_app().await;
    let user = create_employee_user(&app).await;

    let payload = employee_payload("Grace", "Hopper", None);
    let (status, _) = post(&app, "/api/employees", &user.token, payload.clone()).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = post(&app, "/api/employees", &user.token, payload).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_search_matches_names_case_insensitively() {
    let (app, _db) = setup_app().await;
    let user = create_employee_user(&app).await;

    create_employee(&app, &user.token, "Alan", "Turing", None).await;
    create_employee(&app, &user.token, "Edsger", "Dijkstra", None).await;

    let (status, body) = get(&app, "/api/employees?search=tur", &user.token).await;
    assert_eq!(status, StatusCode::OK);
    let found = body["data"].as_array().unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0]["lastName"], "Turing");

    let (_, body) = get(&app, "/api/employees", &user.token).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_update_skips_zero_salary_but_honors_explicit_false() {
    let (app, _db) = setup_app().await;
    let user = create_employee_user(&app).await;
    let id = create_employee(&app, &user.token, "Barbara", "Liskov", None).await;

    let (status, body) = put(
        &app,
        &format!("/api/employees/{}", id),
        &user.token,
        json!({ "salary": 0, "position": "", "isEmployed": false }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["salary"], 50000.0);
    assert_eq!(body["data"]["position"], "Engineer");
    assert_eq!(body["data"]["isEmployed"], false);
}

#[tokio::test]
async fn test_delete_employee_then_missing() {
    let (app, _db) = setup_app().await;
    let user = create_employee_user(&app).await;
    let id = create_employee(&app, &user.token, "Ken", "Thompson", None).await;
    let uri = format!("/api/employees/{}", id);

    let (status, body) = delete(&app, &uri, &user.token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["message"], "Employee removed");

    let (status, body) = delete(&app, &uri, &user.token).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Employee not found");

    let (status, _) = get(&app, &uri, &user.token).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_malformed_id_is_bad_request() {
    let (app, _db) = setup_app().await;
    let user = create_employee_user(&app).await;

    let (status, _) = get(&app, "/api/employees/not-a-uuid", &user.token).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_bulk_update_reports_matched_and_modified() {
    let (app, _db) = setup_app().await;
    let user = create_employee_user(&app).await;

    let first = create_employee(&app, &user.token, "Dennis", "Ritchie", None).await;
    let second = create_employee(&app, &user.token, "Bjarne", "Stroustrup", None).await;
    let missing = Uuid::new_v4();

    let (status, body) = put(
        &app,
        "/api/employees/bulk",
        &user.token,
        json!({
            "employeeIds": [first, second, missing],
            "updateFields": { "department": "Systems" }
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["matchedCount"], 2);
    assert_eq!(body["data"]["modifiedCount"], 2);

    let (_, body) = get(&app, &format!("/api/employees/{}", second), &user.token).await;
    assert_eq!(body["data"]["department"], "Systems");
}

#[tokio::test]
async fn test_bulk_update_without_changes_is_bad_request() {
    let (app, _db) = setup_app().await;
    let user = create_employee_user(&app).await;
    let id = create_employee(&app, &user.token, "Linus", "Torvalds", None).await;

    let (status, _) = put(
        &app,
        "/api/employees/bulk",
        &user.token,
        json!({ "employeeIds": [id], "updateFields": { "salary": 0 } }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_nested_validation_errors_report_their_path() {
    let (app, _db) = setup_app().await;
    let user = create_employee_user(&app).await;
    let id = create_employee(&app, &user.token, "Tony", "Hoare", None).await;

    let (status, body) = put(
        &app,
        "/api/employees/bulk",
        &user.token,
        json!({ "employeeIds": [id], "updateFields": { "salary": -5 } }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["validationErrors"]["update_fields.salary"][0],
        "Salary must not be negative"
    );
}

#[tokio::test]
async fn test_update_employee_rejects_malformed_email() {
    let (app, _db) = setup_app().await;
    let user = create_employee_user(&app).await;
    let employee = create_employee(&app, &user.token, "Donald", "Knuth", None).await;

    let (status, body) = put(
        &app,
        &format!("/api/employees/{}", employee),
        &user.token,
        json!({ "email": "not-an-email" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["validationErrors"]["email"][0], "Invalid email format");
}
