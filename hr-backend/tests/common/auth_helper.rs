// tests/common/auth_helper.rs

use axum::{http::Method, http::StatusCode, Router};
use serde_json::{json, Value};
use uuid::Uuid;

use super::request::{json_request, send};

pub const TEST_PASSWORD: &str = "Passw0rd!";

/// テスト用のユーザー情報
#[derive(Debug, Clone)]
pub struct TestUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: String,
    pub token: String,
}

/// 一意なメールアドレスの登録リクエスト
pub fn register_payload(role: &str) -> Value {
    let suffix = &Uuid::new_v4().simple().to_string()[..8];
    json!({
        "name": format!("User {}", suffix),
        "email": format!("user{}@example.com", suffix),
        "password": TEST_PASSWORD,
        "role": role,
    })
}

pub async fn register(app: &Router, payload: Value) -> (StatusCode, Value) {
    send(
        app,
        json_request(Method::POST, "/api/auth/register", None, Some(payload)),
    )
    .await
}

pub async fn login(app: &Router, email: &str, password: &str) -> (StatusCode, Value) {
    send(
        app,
        json_request(
            Method::POST,
            "/api/auth/login",
            None,
            Some(json!({ "email": email, "password": password })),
        ),
    )
    .await
}

/// 指定ロールのユーザーを登録してログインする
pub async fn create_user_with_role(app: &Router, role: &str) -> TestUser {
    let payload = register_payload(role);
    let (status, body) = register(app, payload.clone()).await;
    assert_eq!(status, StatusCode::CREATED, "register failed: {:?}", body);

    let email = payload["email"].as_str().unwrap();
    let (status, body) = login(app, email, TEST_PASSWORD).await;
    assert_eq!(status, StatusCode::OK, "login failed: {:?}", body);

    let data = &body["data"];
    TestUser {
        id: Uuid::parse_str(data["id"].as_str().unwrap()).unwrap(),
        name: data["name"].as_str().unwrap().to_string(),
        email: email.to_string(),
        role: data["role"].as_str().unwrap().to_string(),
        token: data["token"].as_str().unwrap().to_string(),
    }
}

pub async fn create_manager(app: &Router) -> TestUser {
    create_user_with_role(app, "manager").await
}

pub async fn create_admin(app: &Router) -> TestUser {
    create_user_with_role(app, "admin").await
}

pub async fn create_employee_user(app: &Router) -> TestUser {
    create_user_with_role(app, "employee").await
}
