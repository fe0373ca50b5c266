//! Repository Module
//!
//! The store interface the API depends on, plus its SQLite implementation.

pub mod employee;

// Re-exports
pub use employee::EmployeeRepository;

use async_trait::async_trait;
use shared::models::Employee;
use shared::validation::ValidEmployee;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    /// A uniqueness constraint rejected the write
    #[error("Duplicate: {0}")]
    Duplicate(String),

    /// The write succeeded but re-reading the row failed
    #[error("Read-back failed: {0}")]
    ReadBack(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err
            && db_err.is_unique_violation()
        {
            return RepoError::Duplicate(db_err.message().to_string());
        }
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Employee persistence, injected into the API through `ServerState`
///
/// Not-found is part of the return type (`Option` / `bool`), never an error.
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    /// All records, newest first
    async fn find_all(&self) -> RepoResult<Vec<Employee>>;

    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Employee>>;

    /// Insert and return the stored row
    async fn create(&self, data: &ValidEmployee) -> RepoResult<Employee>;

    /// Replace name/email/position, refresh `updated_at`; `None` when no row matched
    async fn update(&self, id: i64, data: &ValidEmployee) -> RepoResult<Option<Employee>>;

    /// Hard delete; `false` when no row matched
    async fn delete(&self, id: i64) -> RepoResult<bool>;
}
