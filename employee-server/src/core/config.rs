/// 服务器配置 - 员工目录服务的所有配置项
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | HOST | 0.0.0.0 | 监听地址 |
/// | PORT | 3001 | HTTP 服务端口 |
/// | DATABASE_PATH | employees.db | SQLite 文件 (或 `:memory:`) |
/// | DB_MAX_CONNECTIONS | 5 | 连接池大小 |
/// | ENVIRONMENT | development | 运行环境 (production 时日志为 JSON) |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_DIR | (未设置) | 日志目录 (按天滚动) |
///
/// # 示例
///
/// ```ignore
/// PORT=8080 DATABASE_PATH=/data/employees.db cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 监听地址
    pub host: String,
    /// HTTP API 服务端口
    pub http_port: u16,
    /// SQLite 数据库路径
    pub database_path: String,
    /// 连接池最大连接数
    pub db_max_connections: u32,
    /// 运行环境: development | staging | production
    pub environment: String,
    /// 日志级别
    pub log_level: String,
    /// 日志目录 (可选)
    pub log_dir: Option<String>,
}

/// In-memory SQLite path understood by [`crate::db::DbService`]
pub const MEMORY_DATABASE: &str = ":memory:";

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置或无法解析，使用默认值
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (env vars in production, maps in tests)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".into()),
            http_port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(3001),
            database_path: lookup("DATABASE_PATH").unwrap_or_else(|| "employees.db".into()),
            db_max_connections: lookup("DB_MAX_CONNECTIONS")
                .and_then(|p| p.parse().ok())
                .filter(|n| *n > 0)
                .unwrap_or(5),
            environment: lookup("ENVIRONMENT").unwrap_or_else(|| "development".into()),
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_dir: lookup("LOG_DIR").filter(|s| !s.is_empty()),
        }
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(database_path: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.database_path = database_path.into();
        config.http_port = http_port;
        config
    }

    /// 是否使用内存数据库
    pub fn is_memory_database(&self) -> bool {
        self.database_path == MEMORY_DATABASE
    }

    /// 是否生产环境 (日志输出 JSON)
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Socket address string for the HTTP listener
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.http_port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
