//! HTTP API
//!
//! Each submodule exposes a `router()` merged by [`crate::routes::build_router`].

pub mod employees;
pub mod health;

use crate::utils::AppError;

/// Catch-all for unknown paths and unsupported methods
pub async fn endpoint_not_found() -> AppError {
    AppError::endpoint_not_found()
}
