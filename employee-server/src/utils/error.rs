//! 统一错误处理
//!
//! [`AppError`] is what every handler returns on failure. Its response body is
//! always `{ "error": <message> }`:
//!
//! | 分类 | 状态码 | 消息 |
//! |------|--------|------|
//! | 验证失败 | 400 | validation reason, verbatim |
//! | 邮箱冲突 | 400 | `Email already exists` |
//! | 请求体无效 | 400 | `Invalid request body` |
//! | 资源不存在 | 404 | `Employee not found` / `Endpoint not found` |
//! | 数据库错误 | 500 | fixed per-operation message, driver text only in logs |
//! | 内部错误 | 500 | `Internal server error` |
//!
//! # 使用示例
//!
//! ```ignore
//! let employee = state.employees.find_by_id(id).await
//!     .map_err(|e| AppError::database("Failed to fetch employee", e))?
//!     .ok_or_else(AppError::employee_not_found)?;
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use shared::response::ErrorBody;
use shared::validation::ValidationError;
use tracing::error;

use crate::db::repository::RepoError;

pub const EMPLOYEE_NOT_FOUND: &str = "Employee not found";
pub const ENDPOINT_NOT_FOUND: &str = "Endpoint not found";
pub const EMAIL_EXISTS: &str = "Email already exists";
pub const INVALID_BODY: &str = "Invalid request body";
pub const INTERNAL_ERROR: &str = "Internal server error";

/// 应用错误枚举
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // ========== 客户端错误 (4xx) ==========
    #[error(transparent)]
    /// 验证失败 (400)
    Validation(#[from] ValidationError),

    #[error("{0}")]
    /// 唯一约束冲突 (400)
    Conflict(String),

    #[error("Invalid request body: {0}")]
    /// 请求体无法解析 (400)
    InvalidBody(String),

    #[error("{0}")]
    /// 资源不存在 (404)
    NotFound(String),

    // ========== 系统错误 (5xx) ==========
    #[error("{public}: {source}")]
    /// 数据库错误 (500)
    Database {
        /// Message shown to the caller
        public: &'static str,
        source: RepoError,
    },

    #[error("Internal server error: {0}")]
    /// 内部错误 (500)
    Internal(String),
}

impl AppError {
    pub fn employee_not_found() -> Self {
        Self::NotFound(EMPLOYEE_NOT_FOUND.to_string())
    }

    pub fn endpoint_not_found() -> Self {
        Self::NotFound(ENDPOINT_NOT_FOUND.to_string())
    }

    /// Map a repository failure for a write.
    ///
    /// A uniqueness violation becomes the client-facing conflict; everything
    /// else is a 500 with `public` as the only text the caller sees.
    pub fn from_write(public: &'static str, err: RepoError) -> Self {
        match err {
            RepoError::Duplicate(_) => Self::Conflict(EMAIL_EXISTS.to_string()),
            other => Self::database(public, other),
        }
    }

    pub fn database(public: &'static str, source: RepoError) -> Self {
        Self::Database { public, source }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::Conflict(_) | AppError::InvalidBody(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Database { .. } | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Text placed in the `error` field of the response body
    pub fn public_message(&self) -> String {
        match self {
            AppError::Validation(reason) => reason.to_string(),
            AppError::Conflict(msg) | AppError::NotFound(msg) => msg.clone(),
            AppError::InvalidBody(_) => INVALID_BODY.to_string(),
            AppError::Database { public, .. } => (*public).to_string(),
            AppError::Internal(_) => INTERNAL_ERROR.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Database { public, source } => {
                error!(target: "database", error = %source, "{public}");
            }
            AppError::Internal(msg) => {
                error!(target: "internal", error = %msg, "Internal error occurred");
            }
            AppError::InvalidBody(detail) => {
                tracing::debug!(detail = %detail, "Rejected request body");
            }
            _ => {}
        }

        (self.status(), Json(ErrorBody::new(self.public_message()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_of(err: AppError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_validation_is_400_with_reason() {
        let (status, body) = body_of(ValidationError::NameRequired.into()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Name is required");
    }

    #[tokio::test]
    async fn test_duplicate_write_is_conflict_400() {
        let err = AppError::from_write(
            "Failed to create employee",
            RepoError::Duplicate("UNIQUE constraint failed: employees.email".into()),
        );
        let (status, body) = body_of(err).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Email already exists");
    }

    #[tokio::test]
    async fn test_database_error_hides_driver_text() {
        let err = AppError::from_write(
            "Failed to create employee",
            RepoError::Database("disk I/O error at /var/lib/secret.db".into()),
        );
        let (status, body) = body_of(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, serde_json::json!({ "error": "Failed to create employee" }));
    }

    #[tokio::test]
    async fn test_invalid_body_hides_decoder_detail() {
        let err = AppError::InvalidBody("expected value at line 1 column 1".into());
        let (status, body) = body_of(err).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid request body");
    }

    #[tokio::test]
    async fn test_not_found_messages() {
        let (status, body) = body_of(AppError::employee_not_found()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Employee not found");

        let (_, body) = body_of(AppError::endpoint_not_found()).await;
        assert_eq!(body["error"], "Endpoint not found");
    }
}
