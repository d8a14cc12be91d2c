// src/service/employee_service.rs

use crate::api::dto::employee_dto::{
    BulkUpdateEmployeesRequest, BulkUpdateResponse, CreateEmployeeRequest, EmployeeDto,
    UpdateEmployeeRequest,
};
use crate::db::DbPool;
use crate::domain::employee_model::{self, Column};
use crate::error::{AppError, AppResult};
use crate::repository::employee_repository::EmployeeRepository;
use crate::utils::error_helper::{conflict_error, convert_validation_errors, not_found_error};
use crate::utils::patch::{patch, truthy};
use sea_orm::{ActiveModelBehavior, IntoActiveModel, Set, Value};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

pub struct EmployeeService {
    repo: Arc<EmployeeRepository>,
}

impl EmployeeService {
    pub fn new(db_pool: DbPool) -> Self {
        Self {
            repo: Arc::new(EmployeeRepository::new(db_pool)),
        }
    }

    pub async fn create_employee(&self, payload: CreateEmployeeRequest) -> AppResult<EmployeeDto> {
        payload
            .validate()
            .map_err(|e| convert_validation_errors(e, "employee_service::create_employee"))?;

        if self.repo.find_by_email(&payload.email).await?.is_some() {
            return Err(conflict_error(
                "Employee with this email already exists",
                "employee_service::create_employee",
            ));
        }

        let mut employee = employee_model::ActiveModel {
            first_name: Set(payload.first_name),
            last_name: Set(payload.last_name),
            email: Set(payload.email),
            phone_number: Set(payload.phone_number),
            position: Set(payload.position),
            department: Set(payload.department),
            start_date: Set(payload.start_date),
            salary: Set(payload.salary),
            ..employee_model::ActiveModel::new()
        };
        if let Some(metrics) = payload.performance_metrics {
            employee.performance_metrics = Set(serde_json::to_value(metrics)
                .map_err(|e| AppError::BadRequest(format!("Invalid performance metrics: {}", e)))?);
        }
        if let Some(is_employed) = payload.is_employed {
            employee.is_employed = Set(is_employed);
        }

        let created = self.repo.create(employee).await?;
        info!(employee_id = %created.id, "Employee created");
        Ok(created.into())
    }

    pub async fn list_employees(&self, search: Option<&str>) -> AppResult<Vec<EmployeeDto>> {
        let employees = self.repo.find_all(search).await?;
        Ok(employees.into_iter().map(Into::into).collect())
    }

    pub async fn get_employee(&self, id: Uuid) -> AppResult<EmployeeDto> {
        let employee = self.find_or_404(id, "employee_service::get_employee").await?;
        Ok(employee.into())
    }

    /// 真値のフィールドのみ上書きする部分更新
    pub async fn update_employee(
        &self,
        id: Uuid,
        payload: UpdateEmployeeRequest,
    ) -> AppResult<EmployeeDto> {
        payload
            .validate()
            .map_err(|e| convert_validation_errors(e, "employee_service::update_employee"))?;

        let current = self
            .find_or_404(id, "employee_service::update_employee")
            .await?;

        let mut employee = current.clone().into_active_model();
        employee.first_name = Set(patch(payload.first_name, current.first_name));
        employee.last_name = Set(patch(payload.last_name, current.last_name));
        employee.email = Set(patch(payload.email, current.email));
        employee.phone_number = Set(truthy(payload.phone_number).or(current.phone_number));
        employee.position = Set(truthy(payload.position).or(current.position));
        employee.department = Set(truthy(payload.department).or(current.department));
        employee.start_date = Set(truthy(payload.start_date).or(current.start_date));
        employee.salary = Set(truthy(payload.salary).or(current.salary));
        if let Some(metrics) = payload.performance_metrics {
            employee.performance_metrics = Set(serde_json::to_value(metrics)
                .map_err(|e| AppError::BadRequest(format!("Invalid performance metrics: {}", e)))?);
        }
        // 在籍フラグは false も明示的な値として扱う
        employee.is_employed = Set(payload.is_employed.unwrap_or(current.is_employed));

        let updated = self.repo.update(employee).await?;
        info!(employee_id = %updated.id, "Employee updated");
        Ok(updated.into())
    }

    pub async fn delete_employee(&self, id: Uuid) -> AppResult<()> {
        let deleted = self.repo.delete(id).await?;
        if deleted == 0 {
            return Err(not_found_error(
                "Employee not found",
                &id.to_string(),
                "employee_service::delete_employee",
            ));
        }
        info!(employee_id = %id, "Employee removed");
        Ok(())
    }

    /// 同じ変更を複数の従業員へ1文で適用する
    pub async fn bulk_update(
        &self,
        payload: BulkUpdateEmployeesRequest,
    ) -> AppResult<BulkUpdateResponse> {
        payload
            .validate()
            .map_err(|e| convert_validation_errors(e, "employee_service::bulk_update"))?;

        let changes = bulk_changes(payload.update_fields)?;
        if changes.is_empty() {
            return Err(AppError::BadRequest(
                "updateFields must contain at least one field to update".to_string(),
            ));
        }

        let matched_count = self.repo.count_by_ids(&payload.employee_ids).await?;
        let modified_count = self
            .repo
            .bulk_update(&payload.employee_ids, changes)
            .await?;

        info!(
            matched_count = matched_count,
            modified_count = modified_count,
            "Employees bulk updated"
        );

        Ok(BulkUpdateResponse {
            matched_count,
            modified_count,
        })
    }

    async fn find_or_404(&self, id: Uuid, context: &str) -> AppResult<employee_model::Model> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Employee not found", &id.to_string(), context))
    }
}

/// 一括更新で書き込む列と値の組（真値のフィールドのみ）
fn bulk_changes(fields: UpdateEmployeeRequest) -> AppResult<Vec<(Column, Value)>> {
    let mut changes: Vec<(Column, Value)> = Vec::new();

    if let Some(v) = truthy(fields.first_name) {
        changes.push((Column::FirstName, v.into()));
    }
    if let Some(v) = truthy(fields.last_name) {
        changes.push((Column::LastName, v.into()));
    }
    if let Some(v) = truthy(fields.email) {
        changes.push((Column::Email, v.into()));
    }
    if let Some(v) = truthy(fields.phone_number) {
        changes.push((Column::PhoneNumber, v.into()));
    }
    if let Some(v) = truthy(fields.position) {
        changes.push((Column::Position, v.into()));
    }
    if let Some(v) = truthy(fields.department) {
        changes.push((Column::Department, v.into()));
    }
    if let Some(v) = truthy(fields.start_date) {
        changes.push((Column::StartDate, v.into()));
    }
    if let Some(v) = truthy(fields.salary) {
        changes.push((Column::Salary, v.into()));
    }
    if let Some(metrics) = fields.performance_metrics {
        let json = serde_json::to_value(metrics)
            .map_err(|e| AppError::BadRequest(format!("Invalid performance metrics: {}", e)))?;
        changes.push((Column::PerformanceMetrics, json.into()));
    }
    if let Some(v) = fields.is_employed {
        changes.push((Column::IsEmployed, v.into()));
    }

    Ok(changes)
}
