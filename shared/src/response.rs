//! API Response types
//!
//! Non-record bodies returned by the employee API. Successful record
//! responses are the bare [`Employee`](crate::Employee) JSON; every failure
//! uses [`ErrorBody`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Uniform error body
///
/// ```json
/// { "error": "Employee not found" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// Delete confirmation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResponse {
    pub message: String,
    /// Path segment exactly as the caller sent it
    pub deleted_id: String,
}

impl DeleteResponse {
    pub fn new(deleted_id: impl Into<String>) -> Self {
        Self {
            message: "Employee deleted successfully".to_string(),
            deleted_id: deleted_id.into(),
        }
    }
}

/// Liveness probe body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "OK".to_string(),
            timestamp: Utc::now(),
        }
    }
}
