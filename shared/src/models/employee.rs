//! Employee Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Employee record as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub position: String,
    /// Set once at insert time
    pub created_at: DateTime<Utc>,
    /// Refreshed on every successful update
    pub updated_at: DateTime<Utc>,
}

/// Create / update payload
///
/// Every field is optional on the wire so that a missing field surfaces as a
/// validation message instead of a decode failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
}

impl EmployeeInput {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        position: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
            position: Some(position.into()),
        }
    }
}

impl Employee {
    /// Case-insensitive substring match across name, email and position.
    ///
    /// `needle` must already be lowercased.
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.email.to_lowercase().contains(needle)
            || self.position.to_lowercase().contains(needle)
    }
}
