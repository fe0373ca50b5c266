//! 健康检查路由
//!
//! | 路径 | 方法 | 说明 | 认证 |
//! |------|------|------|------|
//! | /api/health | GET | 存活检查 (不访问数据库) | 无 |
//!
//! ```json
//! { "status": "OK", "timestamp": "2024-05-01T12:00:00.123Z" }
//! ```

use axum::{Json, Router, routing::get};
use shared::response::HealthResponse;

use crate::core::ServerState;

use super::endpoint_not_found;

/// 健康检查路由 - 公共路由
pub fn router() -> Router<ServerState> {
    Router::new().route("/api/health", get(health).fallback(endpoint_not_found))
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
