// src/middleware/action_logger.rs

use crate::domain::action_log_model::AuditAction;
use crate::middleware::auth::AuthenticatedUser;
use crate::service::action_log_service::ActionLogService;
use axum::{
    extract::{Request, State},
    http::Method,
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct ActionLogger {
    action_log_service: Arc<ActionLogService>,
}

impl ActionLogger {
    pub fn new(action_log_service: Arc<ActionLogService>) -> Self {
        Self { action_log_service }
    }
}

/// 監査対象の操作を記録してからハンドラーを実行するミドルウェア。
/// 記録の失敗はレスポンスに影響しない。
pub async fn log_action(
    State(logger): State<ActionLogger>,
    request: Request,
    next: Next,
) -> Response {
    let action = audit_action_for(request.method(), request.uri().path());
    let user_id = request
        .extensions()
        .get::<AuthenticatedUser>()
        .map(AuthenticatedUser::user_id);

    if let (Some(action), Some(user_id)) = (action, user_id) {
        logger.action_log_service.record(user_id, action).await;
    }

    next.run(request).await
}

/// メソッドとパスから監査ラベルを決める（参照系は対象外）
fn audit_action_for(method: &Method, path: &str) -> Option<AuditAction> {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    match (method.as_str(), segments.as_slice()) {
        ("POST", ["api", "policies"]) => Some(AuditAction::CreatePolicy),
        ("PUT", ["api", "policies", _]) => Some(AuditAction::UpdatePolicy),
        ("DELETE", ["api", "policies", _]) => Some(AuditAction::DeletePolicy),
        ("POST", ["api", "roles"]) => Some(AuditAction::CreateRole),
        ("PUT", ["api", "roles", _]) => Some(AuditAction::UpdateRole),
        ("DELETE", ["api", "roles", _]) => Some(AuditAction::DeleteRole),
        _ => None,
    }
}
