// src/service/policy_service.rs

use crate::api::dto::policy_dto::{CreatePolicyRequest, PolicyDto, UpdatePolicyRequest};
use crate::db::DbPool;
use crate::domain::company_policy_model;
use crate::error::AppResult;
use crate::repository::company_policy_repository::CompanyPolicyRepository;
use crate::utils::error_helper::{convert_validation_errors, not_found_error};
use crate::utils::patch::patch;
use sea_orm::{ActiveModelBehavior, IntoActiveModel, Set};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

pub struct PolicyService {
    repo: Arc<CompanyPolicyRepository>,
}

impl PolicyService {
    pub fn new(db_pool: DbPool) -> Self {
        Self {
            repo: Arc::new(CompanyPolicyRepository::new(db_pool)),
        }
    }

    pub async fn create_policy(&self, payload: CreatePolicyRequest) -> AppResult<PolicyDto> {
        payload
            .validate()
            .map_err(|e| convert_validation_errors(e, "policy_service::create_policy"))?;

        let created = self
            .repo
            .create(company_policy_model::ActiveModel {
                policy_name: Set(payload.policy_name),
                description: Set(payload.description),
                value: Set(payload.value),
                ..company_policy_model::ActiveModel::new()
            })
            .await?;

        info!(policy_id = %created.id, "Policy created");
        Ok(created.into())
    }

    /// 新しい順
    pub async fn list_policies(&self) -> AppResult<Vec<PolicyDto>> {
        let policies = self.repo.find_all().await?;
        Ok(policies.into_iter().map(Into::into).collect())
    }

    pub async fn update_policy(&self, id: Uuid, payload: UpdatePolicyRequest) -> AppResult<PolicyDto> {
        payload
            .validate()
            .map_err(|e| convert_validation_errors(e, "policy_service::update_policy"))?;

        let current = self.repo.find_by_id(id).await?.ok_or_else(|| {
            not_found_error("Policy not found", &id.to_string(), "policy_service::update_policy")
        })?;

        let mut policy = current.clone().into_active_model();
        policy.policy_name = Set(patch(payload.policy_name, current.policy_name));
        policy.description = Set(patch(payload.description, current.description));
        policy.value = Set(patch(payload.value, current.value));

        let updated = self.repo.update(policy).await?;
        info!(policy_id = %updated.id, "Policy updated");
        Ok(updated.into())
    }

    pub async fn delete_policy(&self, id: Uuid) -> AppResult<()> {
        if self.repo.delete(id).await? == 0 {
            return Err(not_found_error(
                "Policy not found",
                &id.to_string(),
                "policy_service::delete_policy",
            ));
        }
        info!(policy_id = %id, "Policy deleted");
        Ok(())
    }
}
