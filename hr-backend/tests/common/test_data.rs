// tests/common/test_data.rs

use axum::{http::StatusCode, Router};
use serde_json::{json, Value};
use uuid::Uuid;

use super::request::post;

pub fn employee_payload(first_name: &str, last_name: &str, department: Option<&str>) -> Value {
    let mut payload = json!({
        "firstName": first_name,
        "lastName": last_name,
        "email": format!(
            "{}.{}.{}@example.com",
            first_name.to_lowercase(),
            last_name.to_lowercase(),
            &Uuid::new_v4().simple().to_string()[..6]
        ),
        "position": "Engineer",
        "salary": 50000,
    });
    if let Some(department) = department {
        payload["department"] = json!(department);
    }
    payload
}

pub fn project_payload(name: &str, team_members: &[Uuid]) -> Value {
    json!({
        "name": name,
        "description": format!("{} description", name),
        "startDate": "2024-01-01",
        "endDate": "2024-12-31",
        "teamMembers": team_members,
    })
}

/// 従業員を作成してIDを返す
pub async fn create_employee(
    app: &Router,
    token: &str,
    first_name: &str,
    last_name: &str,
    department: Option<&str>,
) -> Uuid {
    let (status, body) = post(
        app,
        "/api/employees",
        token,
        employee_payload(first_name, last_name, department),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "create employee failed: {:?}", body);
    Uuid::parse_str(body["data"]["id"].as_str().unwrap()).unwrap()
}

/// プロジェクトを作成してIDを返す
pub async fn create_project(app: &Router, token: &str, name: &str, team_members: &[Uuid]) -> Uuid {
    let (status, body) = post(
        app,
        "/api/project",
        token,
        project_payload(name, team_members),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "create project failed: {:?}", body);
    Uuid::parse_str(body["data"]["id"].as_str().unwrap()).unwrap()
}
