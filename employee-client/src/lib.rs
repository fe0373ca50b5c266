//! Employee Client - typed access to the employee directory API
//!
//! - [`EmployeeClient`]: one method per endpoint, over `reqwest`
//! - [`filter_employees`]: local search over an already-fetched list
//! - [`EmployeeList`]: list state that only changes when a call succeeds

pub mod config;
pub mod error;
pub mod filter;
pub mod http;
pub mod list;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use filter::filter_employees;
pub use http::{EmployeeApi, EmployeeClient};
pub use list::EmployeeList;

// Re-export shared types for convenience
pub use shared::{DeleteResponse, Employee, EmployeeInput, HealthResponse};
