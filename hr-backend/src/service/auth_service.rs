// src/service/auth_service.rs

use crate::api::dto::auth_dto::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};
use crate::db::DbPool;
use crate::domain::user_model::{self, UserRole};
use crate::error::{AppError, AppResult};
use crate::repository::user_repository::UserRepository;
use crate::utils::error_helper::{
    convert_validation_errors, duplicate_error, internal_server_error,
};
use crate::utils::jwt::JwtManager;
use crate::utils::password::{PasswordError, PasswordManager};
use sea_orm::{ActiveModelBehavior, Set};
use std::sync::Arc;
use tracing::{info, warn};
use validator::Validate;

/// ログイン失敗時は原因に関わらず同じ文言を返す
const INVALID_CREDENTIALS: &str = "Invalid credentials";

pub struct AuthService {
    user_repo: Arc<UserRepository>,
    password_manager: Arc<PasswordManager>,
    jwt_manager: Arc<JwtManager>,
}

impl AuthService {
    pub fn new(
        db_pool: DbPool,
        password_manager: Arc<PasswordManager>,
        jwt_manager: Arc<JwtManager>,
    ) -> Self {
        Self {
            user_repo: Arc::new(UserRepository::new(db_pool)),
            password_manager,
            jwt_manager,
        }
    }

    /// ユーザー登録（トークンは発行しない）
    pub async fn register(&self, payload: RegisterRequest) -> AppResult<RegisterResponse> {
        // ロールは何よりも先に検証する
        let role = UserRole::from_str(&payload.role).ok_or_else(|| {
            warn!(role = %payload.role, "Registration attempt with invalid role");
            AppError::BadRequest("Invalid role".to_string())
        })?;

        payload
            .validate()
            .map_err(|e| convert_validation_errors(e, "auth_service::register"))?;

        if self.user_repo.find_by_email(&payload.email).await?.is_some() {
            return Err(duplicate_error(
                "User already exists",
                "auth_service::register",
            ));
        }

        self.password_manager
            .validate_password_strength(&payload.password)
            .map_err(|e| match e {
                PasswordError::WeakPassword(msg) => AppError::ValidationError(msg),
                other => internal_server_error(other, "auth_service::register", "Registration failed"),
            })?;

        let password_hash = self
            .password_manager
            .hash_password(&payload.password)
            .map_err(|e| internal_server_error(e, "auth_service::register", "Registration failed"))?;

        let user = self
            .user_repo
            .create(user_model::ActiveModel {
                name: Set(payload.name),
                email: Set(payload.email),
                password_hash: Set(password_hash),
                role: Set(role.as_str().to_string()),
                ..user_model::ActiveModel::new()
            })
            .await?;

        info!(user_id = %user.id, role = %role, "User registered successfully");

        Ok(user.into())
    }

    /// ログインしてセッショントークンを発行
    pub async fn login(&self, payload: LoginRequest) -> AppResult<LoginResponse> {
        payload
            .validate()
            .map_err(|e| convert_validation_errors(e, "auth_service::login"))?;

        let user = self
            .user_repo
            .find_by_email(&payload.email)
            .await?
            .ok_or_else(|| {
                warn!(email = %payload.email, "Login attempt with unknown email");
                AppError::BadRequest(INVALID_CREDENTIALS.to_string())
            })?;

        let is_valid = self
            .password_manager
            .verify_password(&payload.password, &user.password_hash)
            .map_err(|e| internal_server_error(e, "auth_service::login", "Authentication failed"))?;

        if !is_valid {
            warn!(user_id = %user.id, "Login attempt with incorrect password");
            return Err(AppError::BadRequest(INVALID_CREDENTIALS.to_string()));
        }

        let token = self
            .jwt_manager
            .issue_token(user.id, user.user_role())
            .map_err(|e| internal_server_error(e, "auth_service::login", "Authentication failed"))?;

        info!(user_id = %user.id, "User logged in");

        Ok(LoginResponse {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
            token,
        })
    }
}
