// tests/integration/auth_tests.rs

use axum::http::StatusCode;
use hr_backend::config::AppConfig;
use hr_backend::domain::user_model;
use hr_backend::utils::jwt::{JwtConfig, JwtManager};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};
use serde_json::json;

use crate::common::app_helper::setup_app;
use crate::common::auth_helper::{
    create_user_with_role, login, register, register_payload, TEST_PASSWORD,
};

#[tokio::test]
async fn test_register_returns_created_user_without_password() {
    let (app, _db) = setup_app().await;

    let payload = register_payload("employee");
    let (status, body) = register(&app, payload.clone()).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["email"], payload["email"]);
    assert_eq!(body["data"]["role"], "employee");
    assert!(body["data"].get("password").is_none());
}

#[tokio::test]
async fn test_register_with_invalid_role_persists_nothing() {
    let (app, db) = setup_app().await;

    let mut payload = register_payload("employee");
    payload["role"] = json!("superuser");
    let email = payload["email"].as_str().unwrap().to_string();

    let (status, body) = register(&app, payload).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid role");

    let stored = user_model::Entity::find()
        .filter(user_model::Column::Email.eq(email))
        .one(&db.connection)
        .await
        .unwrap();
    assert!(stored.is_none());
}

#[tokio::test]
async fn test_register_duplicate_email_is_rejected() {
    let (app, _db) = setup_app().await;

    let payload = register_payload("manager");
    let (status, _) = register(&app, payload.clone()).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = register(&app, payload).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_login_failures_share_the_same_message() {
    let (app, _db) = setup_app().await;
    let user = create_user_with_role(&app, "employee").await;

    let (wrong_password_status, wrong_password) =
        login(&app, &user.email, "not-the-password").await;
    let (unknown_status, unknown) = login(&app, "nobody@example.com", TEST_PASSWORD).await;

    assert_eq!(wrong_password_status, StatusCode::BAD_REQUEST);
    assert_eq!(unknown_status, StatusCode::BAD_REQUEST);
    assert_eq!(wrong_password["message"], "Invalid credentials");
    assert_eq!(wrong_password["message"], unknown["message"]);
}

#[tokio::test]
async fn test_login_token_identifies_the_user() {
    let (app, _db) = setup_app().await;
    let user = create_user_with_role(&app, "manager").await;

    let config = AppConfig::for_testing();
    let manager = JwtManager::new(JwtConfig::from(&config.jwt)).unwrap();
    let claims = manager.verify_token(&user.token).unwrap();

    assert_eq!(claims.user_id().unwrap(), user.id);
    assert_eq!(user.role, "manager");
}
