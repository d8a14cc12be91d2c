// src/middleware/authorization.rs

use crate::domain::user_model::UserRole;
use crate::middleware::auth::AuthenticatedUser;
use crate::utils::error_helper::forbidden_error;
use crate::error::AppError;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};

/// ルートに許可するロールの集合
#[derive(Clone, Debug)]
pub struct RequireRoles {
    pub roles: Vec<UserRole>,
}

impl RequireRoles {
    pub fn new(roles: &[UserRole]) -> Self {
        Self {
            roles: roles.to_vec(),
        }
    }
}

/// ロール制限ミドルウェアマクロ
///
/// ```ignore
/// .route_layer(require_roles!(UserRole::Manager, UserRole::Admin))
/// ```
#[macro_export]
macro_rules! require_roles {
    ($($role:expr),+ $(,)?) => {{
        use axum::middleware::from_fn_with_state;
        use $crate::middleware::authorization::{check_roles, RequireRoles};

        from_fn_with_state(RequireRoles::new(&[$($role),+]), check_roles)
    }};
}

/// 認証済みユーザーのロールが許可集合に含まれるかを確認する
pub async fn check_roles(
    State(required): State<RequireRoles>,
    req: Request,
    next: Next,
) -> Response {
    let Some(user) = req.extensions().get::<AuthenticatedUser>().cloned() else {
        return AppError::Unauthorized("Authentication required".to_string()).into_response();
    };

    if !user.has_any_role(&required.roles) {
        let allowed: Vec<&str> = required.roles.iter().map(UserRole::as_str).collect();
        return forbidden_error(
            &format!("Access denied: requires one of [{}]", allowed.join(", ")),
            &format!("authorization::check_roles::{}", req.uri().path()),
            &user.user_id.to_string(),
        )
        .into_response();
    }

    next.run(req).await
}
