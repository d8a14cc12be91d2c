// src/error.rs

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::{DbErr, SqlErr};
use serde::Serialize;
use serde_json::json;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    DbErr(#[from] DbErr),

    #[error("Item not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Multiple validation errors")]
    ValidationErrors(Vec<String>),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal server error: {0}")]
    InternalServerError(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::DbErr(db_err) => match db_err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => StatusCode::CONFLICT,
                _ => match db_err {
                    DbErr::RecordNotFound(_) => StatusCode::NOT_FOUND,
                    _ => StatusCode::INTERNAL_SERVER_ERROR,
                },
            },
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ValidationError(_)
            | AppError::ValidationErrors(_)
            | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

fn simple(message: String, error_type: &str) -> ErrorResponse {
    ErrorResponse {
        success: false,
        error: message.clone(),
        message,
        details: None,
        validation_errors: None,
        errors: None,
        error_type: error_type.to_string(),
    }
}

// axum でエラーをHTTPレスポンスに変換するための実装
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_response = match self {
            AppError::DbErr(db_err) => {
                // 一意制約違反は重複として扱う
                if let Some(SqlErr::UniqueConstraintViolation(detail)) = db_err.sql_err() {
                    tracing::warn!(detail = %detail, "Unique constraint violation");
                    simple(
                        "A record with the same unique value already exists".to_string(),
                        "conflict",
                    )
                } else {
                    // サーバーログには詳細を出す
                    tracing::error!(error = ?db_err, "Database error");
                    let (message, details) = match &db_err {
                        DbErr::RecordNotFound(entity) => (
                            "The requested resource was not found".to_string(),
                            Some(json!({ "entity": entity })),
                        ),
                        _ => ("A database error occurred".to_string(), None),
                    };
                    ErrorResponse {
                        details,
                        ..simple(message, "database_error")
                    }
                }
            }
            AppError::NotFound(message) => simple(message, "not_found"),
            AppError::ValidationError(message) => simple(message, "validation_error"),
            AppError::ValidationErrors(errors) => {
                let mut field_errors = HashMap::new();
                for error in &errors {
                    if let Some((field, message)) = error.split_once(": ") {
                        field_errors
                            .entry(field.to_string())
                            .or_insert_with(Vec::new)
                            .push(message.to_string());
                    }
                }
                let errors_array: Vec<serde_json::Value> =
                    errors.iter().map(|e| json!({"message": e})).collect();
                ErrorResponse {
                    validation_errors: Some(field_errors),
                    errors: Some(errors_array),
                    ..simple("Validation failed".to_string(), "validation_errors")
                }
            }
            AppError::BadRequest(message) => simple(message, "bad_request"),
            AppError::Unauthorized(message) => simple(message, "unauthorized"),
            AppError::Forbidden(message) => simple(message, "forbidden"),
            AppError::Conflict(message) => simple(message, "conflict"),
            AppError::InternalServerError(message) => {
                tracing::error!(message = %message, "Internal server error");
                simple(
                    "An internal server error occurred".to_string(),
                    "internal_server_error",
                )
            }
        };

        (status, Json(error_response)).into_response()
    }
}

// Result 型のエイリアス
pub type AppResult<T> = Result<T, AppError>;

/// 統一的なエラーレスポンス構造
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation_errors: Option<HashMap<String, Vec<String>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<serde_json::Value>>,
    pub error_type: String,
}
