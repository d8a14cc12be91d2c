// src/extractors/uuid.rs

use crate::error::AppError;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use uuid::Uuid;

/// URLパスからUUIDパラメータ名を推測する
fn extract_uuid_param_name(path: &str) -> &'static str {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    // 直前のセグメントからパラメータ名を推測
    match segments.len().checked_sub(2).and_then(|i| segments.get(i)) {
        Some(&"employees") => "employee_id",
        Some(&"project") => "project_id",
        Some(&"performance") => "employee_id",
        Some(&"policies") => "policy_id",
        Some(&"roles") => "role_id",
        _ => "id",
    }
}

/// パスパラメータからUUIDを抽出し、形式不正なら 400 を返す
#[derive(Debug, Clone, Copy)]
pub struct ValidatedUuid(pub Uuid);

impl<S> FromRequestParts<S> for ValidatedUuid
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let param_name = extract_uuid_param_name(parts.uri.path());

        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| {
                AppError::BadRequest(format!("Missing path parameter '{}': {}", param_name, e))
            })?;

        let uuid = Uuid::parse_str(&raw).map_err(|_| {
            AppError::BadRequest(format!(
                "Invalid UUID format for '{}': '{}'",
                param_name, raw
            ))
        })?;

        Ok(ValidatedUuid(uuid))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, routing::get, Router};
    use tower::ServiceExt;

    #[test]
    fn test_param_name_from_path() {
        assert_eq!(extract_uuid_param_name("/api/employees/abc"), "employee_id");
        assert_eq!(extract_uuid_param_name("/api/project/abc"), "project_id");
        assert_eq!(
            extract_uuid_param_name("/api/project/performance/abc"),
            "employee_id"
        );
        assert_eq!(extract_uuid_param_name("/api/metrics/abc"), "id");
    }

    async fn echo(ValidatedUuid(id): ValidatedUuid) -> String {
        id.to_string()
    }

    #[tokio::test]
    async fn test_validated_uuid_accepts_and_rejects() {
        let app = Router::new().route("/items/{id}", get(echo));
        let id = Uuid::new_v4();

        let ok = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri(format!("/items/{}", id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(ok.status(), axum::http::StatusCode::OK);

        let bad = app
            .oneshot(
                Request::builder()
                    .uri("/items/not-a-uuid")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(bad.status(), axum::http::StatusCode::BAD_REQUEST);
    }
}
