// src/utils/error_helper.rs

//! エラーハンドリングの統一化ヘルパー
//!
//! サービス層とハンドラー層で共通して使うログ付きエラー生成関数。

use crate::error::AppError;
use tracing::{error, warn};
use validator::{ValidationErrors, ValidationErrorsKind};

/// validatorのValidationErrorsを "field: message" 形式のAppErrorに変換する
///
/// ネストした構造体・リストのエラーは "update_fields.salary" や "items[0].name" のように
/// パスを付けて展開する。
pub fn convert_validation_errors(validation_errors: ValidationErrors, context: &str) -> AppError {
    let mut errors = Vec::new();
    collect_validation_messages("", &validation_errors, &mut errors);
    errors.sort();

    warn!(
        context = %context,
        error_count = errors.len(),
        "Validation failed"
    );

    AppError::ValidationErrors(errors)
}

fn collect_validation_messages(prefix: &str, errors: &ValidationErrors, out: &mut Vec<String>) {
    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{}.{}", prefix, field)
        };

        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                out.extend(field_errors.iter().map(|error| {
                    let message = error
                        .message
                        .as_ref()
                        .map_or_else(|| "Invalid value".to_string(), |cow| cow.to_string());
                    format!("{}: {}", path, message)
                }));
            }
            ValidationErrorsKind::Struct(inner) => collect_validation_messages(&path, inner, out),
            ValidationErrorsKind::List(items) => {
                for (index, inner) in items {
                    collect_validation_messages(&format!("{}[{}]", path, index), inner, out);
                }
            }
        }
    }
}

/// 内部サーバーエラーをログ付きで生成
pub fn internal_server_error<E: std::fmt::Display>(
    error: E,
    context: &str,
    user_message: &str,
) -> AppError {
    error!(
        error = %error,
        context = %context,
        "Internal server error occurred"
    );
    AppError::InternalServerError(user_message.to_string())
}

/// 禁止エラーをログ付きで生成
pub fn forbidden_error(message: &str, context: &str, user_id: &str) -> AppError {
    warn!(
        context = %context,
        message = %message,
        user_id = %user_id,
        "Forbidden access attempt"
    );
    AppError::Forbidden(message.to_string())
}

/// リソース未発見エラーをログ付きで生成
pub fn not_found_error(message: &str, identifier: &str, context: &str) -> AppError {
    warn!(
        context = %context,
        identifier = %identifier,
        "Resource not found"
    );
    AppError::NotFound(message.to_string())
}

/// 一意制約に反する重複をログ付きで生成（409）
pub fn conflict_error(message: &str, context: &str) -> AppError {
    warn!(
        context = %context,
        message = %message,
        "Conflicting resource rejected"
    );
    AppError::Conflict(message.to_string())
}

/// 重複などの入力エラーをログ付きで生成（400）
pub fn duplicate_error(message: &str, context: &str) -> AppError {
    warn!(
        context = %context,
        message = %message,
        "Duplicate resource rejected"
    );
    AppError::BadRequest(message.to_string())
}
