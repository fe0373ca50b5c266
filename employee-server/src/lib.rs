//! Employee Directory Server
//!
//! REST API over a single SQLite table of employee records.
//!
//! # 模块结构
//!
//! ```text
//! employee-server/src/
//! ├── core/          # 配置、状态、服务器生命周期
//! ├── db/            # SQLite 连接池、行类型、存储接口
//! ├── api/           # HTTP 路由和处理器
//! ├── routes/        # 路由组装和中间件栈
//! ├── middleware/    # 请求日志
//! └── utils/         # 错误类型、提取器、日志初始化
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod middleware;
pub mod routes;
pub mod utils;

// Re-export 公共类型
pub use crate::core::{Config, Server, ServerError, ServerState};
pub use db::DbService;
pub use db::repository::{EmployeeRepository, EmployeeStore, RepoError, RepoResult};
pub use routes::{build_app, build_router};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// Load `.env` and initialise logging from the resulting environment
pub fn setup_environment() -> Config {
    // A missing .env is the normal case in production
    let dotenv_loaded = dotenvy::dotenv().is_ok();

    let config = Config::from_env();
    init_logger(&config);

    if dotenv_loaded {
        tracing::debug!("Loaded environment from .env");
    }
    config
}
