use thiserror::Error;

use crate::db::repository::RepoError;

/// Startup / lifecycle failures (never reach an HTTP client)
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("数据库初始化失败: {0}")]
    Database(#[from] RepoError),

    #[error("无法绑定地址 {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("服务器运行错误: {0}")]
    Io(#[from] std::io::Error),
}

/// 服务器生命周期的 Result 类型别名
pub type Result<T> = std::result::Result<T, ServerError>;
