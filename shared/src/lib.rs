//! Shared types for the employee directory
//!
//! Wire models, the request validation layer and small utilities used by
//! both `employee-server` and `employee-client`.

pub mod models;
pub mod response;
pub mod util;
pub mod validation;

// Re-exports
pub use models::{Employee, EmployeeInput};
pub use response::{DeleteResponse, ErrorBody, HealthResponse};
pub use serde::{Deserialize, Serialize};
pub use validation::{ValidEmployee, ValidationError, validate_employee};
