// src/service/role_service.rs

use crate::api::dto::role_dto::{CreateRoleRequest, RoleDto, UpdateRoleRequest};
use crate::db::DbPool;
use crate::domain::role_model;
use crate::error::AppResult;
use crate::repository::role_repository::RoleRepository;
use crate::utils::error_helper::{convert_validation_errors, not_found_error};
use crate::utils::patch::{patch, truthy};
use sea_orm::{ActiveModelBehavior, IntoActiveModel, Set};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

pub struct RoleService {
    repo: Arc<RoleRepository>,
}

fn permissions_to_json(permissions: &[String]) -> serde_json::Value {
    serde_json::Value::Array(
        permissions
            .iter()
            .map(|p| serde_json::Value::String(p.clone()))
            .collect(),
    )
}

impl RoleService {
    pub fn new(db_pool: DbPool) -> Self {
        Self {
            repo: Arc::new(RoleRepository::new(db_pool)),
        }
    }

    pub async fn create_role(&self, payload: CreateRoleRequest) -> AppResult<RoleDto> {
        payload
            .validate()
            .map_err(|e| convert_validation_errors(e, "role_service::create_role"))?;

        let created = self
            .repo
            .create(role_model::ActiveModel {
                role_name: Set(payload.role_name),
                permissions: Set(permissions_to_json(&payload.permissions)),
                ..role_model::ActiveModel::new()
            })
            .await?;

        info!(role_id = %created.id, role_name = %created.role_name, "Role created");
        Ok(created.into())
    }

    pub async fn list_roles(&self) -> AppResult<Vec<RoleDto>> {
        let roles = self.repo.find_all().await?;
        Ok(roles.into_iter().map(Into::into).collect())
    }

    pub async fn update_role(&self, id: Uuid, payload: UpdateRoleRequest) -> AppResult<RoleDto> {
        payload
            .validate()
            .map_err(|e| convert_validation_errors(e, "role_service::update_role"))?;

        let current = self.repo.find_by_id(id).await?.ok_or_else(|| {
            not_found_error("Role not found", &id.to_string(), "role_service::update_role")
        })?;

        let mut role = current.clone().into_active_model();
        role.role_name = Set(patch(payload.role_name, current.role_name));
        if let Some(permissions) = truthy(payload.permissions) {
            role.permissions = Set(permissions_to_json(&permissions));
        }

        let updated = self.repo.update(role).await?;
        info!(role_id = %updated.id, "Role updated");
        Ok(updated.into())
    }

    pub async fn delete_role(&self, id: Uuid) -> AppResult<()> {
        if self.repo.delete(id).await? == 0 {
            return Err(not_found_error(
                "Role not found",
                &id.to_string(),
                "role_service::delete_role",
            ));
        }
        info!(role_id = %id, "Role deleted");
        Ok(())
    }
}
