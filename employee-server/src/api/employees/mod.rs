//! Employee API Module
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/employees | GET | 列表 (最新优先) |
//! | /api/employees | POST | 创建 |
//! | /api/employees/{id} | GET | 详情 |
//! | /api/employees/{id} | PUT | 更新 |
//! | /api/employees/{id} | DELETE | 删除 |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

use super::endpoint_not_found;

/// Employee router
pub fn router() -> Router<ServerState> {
    Router::new()
        .route(
            "/api/employees",
            get(handler::list)
                .post(handler::create)
                .fallback(endpoint_not_found),
        )
        .route(
            "/api/employees/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete)
                .fallback(endpoint_not_found),
        )
}
