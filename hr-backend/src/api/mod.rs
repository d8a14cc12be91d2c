// src/api/mod.rs
use crate::config::AppConfig;
use crate::db::DbPool;
use crate::error::AppError;
use crate::middleware::action_logger::ActionLogger;
use crate::middleware::auth::AuthMiddlewareConfig;
use crate::repository::user_repository::UserRepository;
use crate::service::{
    action_log_service::ActionLogService, auth_service::AuthService,
    employee_service::EmployeeService, metrics_service::MetricsService,
    performance_service::PerformanceService, policy_service::PolicyService,
    project_service::ProjectService, role_service::RoleService,
};
use crate::utils::jwt::{JwtConfig, JwtManager};
use crate::utils::password::PasswordManager;
use std::sync::Arc;

pub mod dto;
pub mod handlers;
pub mod router;

/// 統一されたアプリケーション状態（起動後は不変）
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService>,
    pub employee_service: Arc<EmployeeService>,
    pub project_service: Arc<ProjectService>,
    pub performance_service: Arc<PerformanceService>,
    pub metrics_service: Arc<MetricsService>,
    pub policy_service: Arc<PolicyService>,
    pub role_service: Arc<RoleService>,
    pub action_log_service: Arc<ActionLogService>,
    pub jwt_manager: Arc<JwtManager>,
    pub user_repository: Arc<UserRepository>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(db: DbPool, config: AppConfig) -> Result<Self, AppError> {
        let jwt_manager = Arc::new(
            JwtManager::new(JwtConfig::from(&config.jwt)).map_err(|e| {
                AppError::InternalServerError(format!("Invalid JWT configuration: {}", e))
            })?,
        );
        let password_manager = Arc::new(PasswordManager::new(&config.password).map_err(|e| {
            AppError::InternalServerError(format!("Invalid password configuration: {}", e))
        })?);

        Ok(Self {
            auth_service: Arc::new(AuthService::new(
                db.clone(),
                password_manager,
                jwt_manager.clone(),
            )),
            employee_service: Arc::new(EmployeeService::new(db.clone())),
            project_service: Arc::new(ProjectService::new(db.clone())),
            performance_service: Arc::new(PerformanceService::new(db.clone())),
            metrics_service: Arc::new(MetricsService::new(db.clone(), config.metrics.clone())),
            policy_service: Arc::new(PolicyService::new(db.clone())),
            role_service: Arc::new(RoleService::new(db.clone())),
            action_log_service: Arc::new(ActionLogService::new(db.clone())),
            user_repository: Arc::new(UserRepository::new(db)),
            jwt_manager,
            config: Arc::new(config),
        })
    }

    pub fn auth_middleware_config(&self) -> AuthMiddlewareConfig {
        AuthMiddlewareConfig {
            jwt_manager: self.jwt_manager.clone(),
            user_repository: self.user_repository.clone(),
        }
    }

    pub fn action_logger(&self) -> ActionLogger {
        ActionLogger::new(self.action_log_service.clone())
    }
}
