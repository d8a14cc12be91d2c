// src/api/dto/employee_dto.rs

use super::common::optional_flexible_datetime;
use crate::domain::employee_model;
use crate::utils::validation::{
    validate_email_or_empty, validate_not_blank, validate_phone_number,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;
use validator::Validate;

// --- Request DTOs ---

#[derive(Deserialize, Serialize, Debug, Clone, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateEmployeeRequest {
    #[validate(
        length(min = 1, max = 100, message = "First name is required"),
        custom(function = validate_not_blank)
    )]
    pub first_name: String,

    #[validate(
        length(min = 1, max = 100, message = "Last name is required"),
        custom(function = validate_not_blank)
    )]
    pub last_name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(custom(function = validate_phone_number))]
    pub phone_number: Option<String>,

    #[validate(length(max = 100, message = "Position must not exceed 100 characters"))]
    pub position: Option<String>,

    #[validate(length(max = 100, message = "Department must not exceed 100 characters"))]
    pub department: Option<String>,

    #[serde(default, deserialize_with = "optional_flexible_datetime::deserialize")]
    pub start_date: Option<DateTime<Utc>>,

    #[validate(range(min = 0.0, message = "Salary must not be negative"))]
    pub salary: Option<f64>,

    pub performance_metrics: Option<HashMap<String, f64>>,

    pub is_employed: Option<bool>,
}

/// 部分更新。真値のフィールドだけが既存値を置き換える（isEmployed のみ false も反映）
#[derive(Deserialize, Serialize, Debug, Clone, Default, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEmployeeRequest {
    #[validate(length(max = 100, message = "First name must not exceed 100 characters"))]
    pub first_name: Option<String>,

    #[validate(length(max = 100, message = "Last name must not exceed 100 characters"))]
    pub last_name: Option<String>,

    #[validate(custom(function = validate_email_or_empty))]
    pub email: Option<String>,

    pub phone_number: Option<String>,

    #[validate(length(max = 100, message = "Position must not exceed 100 characters"))]
    pub position: Option<String>,

    #[validate(length(max = 100, message = "Department must not exceed 100 characters"))]
    pub department: Option<String>,

    #[serde(default, deserialize_with = "optional_flexible_datetime::deserialize")]
    pub start_date: Option<DateTime<Utc>>,

    #[validate(range(min = 0.0, message = "Salary must not be negative"))]
    pub salary: Option<f64>,

    pub performance_metrics: Option<HashMap<String, f64>>,

    pub is_employed: Option<bool>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BulkUpdateEmployeesRequest {
    #[validate(length(min = 1, message = "employeeIds must not be empty"))]
    pub employee_ids: Vec<Uuid>,

    #[validate(nested)]
    pub update_fields: UpdateEmployeeRequest,
}

#[derive(Deserialize, Debug, Default)]
pub struct EmployeeSearchQuery {
    pub search: Option<String>,
}

// --- Response DTOs ---

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDto {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub position: Option<String>,
    pub department: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub salary: Option<f64>,
    pub performance_metrics: HashMap<String, f64>,
    pub is_employed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<employee_model::Model> for EmployeeDto {
    fn from(model: employee_model::Model) -> Self {
        Self {
            performance_metrics: serde_json::from_value(model.performance_metrics)
                .unwrap_or_default(),
            id: model.id,
            first_name: model.first_name,
            last_name: model.last_name,
            email: model.email,
            phone_number: model.phone_number,
            position: model.position,
            department: model.department,
            start_date: model.start_date,
            salary: model.salary,
            is_employed: model.is_employed,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BulkUpdateResponse {
    pub matched_count: u64,
    pub modified_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_request_accepts_camel_case_and_date_only() {
        let req: CreateEmployeeRequest = serde_json::from_value(json!({
            "firstName": "Ada",
            "lastName": "Lovelace",
            "email": "ada@example.com",
            "startDate": "2024-01-15",
            "salary": 5000
        }))
        .unwrap();
        assert_eq!(req.first_name, "Ada");
        assert!(req.start_date.is_some());
        assert_eq!(req.salary, Some(5000.0));
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_create_request_rejects_blank_names_and_bad_email() {
        let req: CreateEmployeeRequest = serde_json::from_value(json!({
            "firstName": "  ",
            "lastName": "",
            "email": "not-an-email"
        }))
        .unwrap();
        let errors = req.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("first_name"));
        assert!(fields.contains_key("last_name"));
        assert!(fields.contains_key("email"));
    }

    #[test]
    fn test_update_request_checks_email_but_allows_empty() {
        let bad: UpdateEmployeeRequest =
            serde_json::from_value(json!({ "email": "nope" })).unwrap();
        assert!(bad.validate().unwrap_err().field_errors().contains_key("email"));

        let empty: UpdateEmployeeRequest = serde_json::from_value(json!({ "email": "" })).unwrap();
        assert!(empty.validate().is_ok());
    }

    #[test]
    fn test_bulk_request_requires_ids() {
        let req: BulkUpdateEmployeesRequest = serde_json::from_value(json!({
            "employeeIds": [],
            "updateFields": { "department": "Sales" }
        }))
        .unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_dto_serializes_camel_case() {
        let dto = EmployeeDto {
            id: Uuid::new_v4(),
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
            phone_number: None,
            position: None,
            department: Some("R&D".into()),
            start_date: None,
            salary: Some(1.0),
            performance_metrics: HashMap::new(),
            is_employed: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let value = serde_json::to_value(dto).unwrap();
        assert_eq!(value["firstName"], "Ada");
        assert_eq!(value["isEmployed"], true);
        assert!(value["performanceMetrics"].is_object());
    }
}
