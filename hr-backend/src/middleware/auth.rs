// src/middleware/auth.rs

use crate::domain::user_model::UserRole;
use crate::error::AppError;
use crate::logging::RequestContext;
use crate::repository::user_repository::UserRepository;
use crate::utils::error_helper::forbidden_error;
use crate::utils::jwt::JwtManager;
use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;
use tracing::{debug, warn};
use uuid::Uuid;

/// JWT認証ミドルウェアの設定
#[derive(Clone)]
pub struct AuthMiddlewareConfig {
    pub jwt_manager: Arc<JwtManager>,
    pub user_repository: Arc<UserRepository>,
}

/// 認証済みユーザー情報（リクエストのエクステンションに格納される）
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub name: String,
    pub email: String,
    pub role: UserRole,
}

impl AuthenticatedUser {
    pub fn user_id(&self) -> Uuid {
        self.user_id
    }

    pub fn has_any_role(&self, roles: &[UserRole]) -> bool {
        roles.contains(&self.role)
    }

    /// ルート内での個別ロールチェック（完全一致）
    pub fn require_role(&self, role: UserRole, context: &str) -> Result<(), AppError> {
        if self.role == role {
            return Ok(());
        }
        Err(forbidden_error(
            &format!("Access denied: requires {} role", role),
            context,
            &self.user_id.to_string(),
        ))
    }
}

/// Bearer トークンを検証し、ユーザーを読み込んでリクエストに添付する
pub async fn jwt_auth_middleware(
    State(config): State<AuthMiddlewareConfig>,
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let path = request.uri().path().to_string();

    let token = extract_bearer_token(&headers).ok_or_else(|| {
        warn!(path = %path, "Missing authentication token");
        AppError::Unauthorized("Not authorized, no token".to_string())
    })?;

    let claims = config.jwt_manager.verify_token(token).map_err(|e| {
        warn!(path = %path, error = %e, "Invalid session token");
        AppError::Unauthorized("Not authorized, token failed".to_string())
    })?;

    let user_id = claims.user_id().map_err(|e| {
        warn!(path = %path, error = %e, "Token subject is not a user id");
        AppError::Unauthorized("Not authorized, token failed".to_string())
    })?;

    // トークン発行後に削除されたユーザーは認証しない
    let user = config
        .user_repository
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| {
            warn!(user_id = %user_id, path = %path, "Token for unknown user");
            AppError::Unauthorized("Not authorized, user not found".to_string())
        })?;

    let authenticated = AuthenticatedUser {
        user_id: user.id,
        role: user.user_role(),
        name: user.name,
        email: user.email,
    };

    debug!(
        user_id = %authenticated.user_id,
        role = %authenticated.role,
        path = %path,
        "Request authenticated"
    );

    if let Some(context) = request.extensions_mut().get_mut::<RequestContext>() {
        context.user_id = Some(authenticated.user_id);
    }
    request.extensions_mut().insert(authenticated);

    Ok(next.run(request).await)
}

/// Authorization ヘッダーから Bearer トークンを取り出す
fn extract_bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

// --- Axum Extractors ---

impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| AppError::Unauthorized("Authentication required".to_string()))
    }
}
