use std::sync::Arc;

use crate::core::{Config, Result};
use crate::db::DbService;
use crate::db::repository::{EmployeeRepository, EmployeeStore};

/// 服务器状态 - 持有所有服务的共享引用
///
/// Cloned into every handler by axum. The store is an explicit, injected
/// handle: production wires the SQLite repository, tests may wire anything
/// implementing [`EmployeeStore`].
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | employees | Arc<dyn EmployeeStore> | 员工存储 |
/// | db | Option<DbService> | SQLite 连接池 (关闭时使用) |
#[derive(Clone)]
pub struct ServerState {
    /// 员工存储
    pub employees: Arc<dyn EmployeeStore>,
    /// Present when the store is backed by our own SQLite pool
    db: Option<DbService>,
}

impl ServerState {
    /// 初始化服务器状态: open the database and wire the SQLite repository
    pub async fn initialize(config: &Config) -> Result<Self> {
        let db = DbService::new(config).await?;
        let employees = Arc::new(EmployeeRepository::new(db.pool.clone()));
        Ok(Self {
            employees,
            db: Some(db),
        })
    }

    /// Build state around an existing store
    pub fn with_store(employees: Arc<dyn EmployeeStore>) -> Self {
        Self {
            employees,
            db: None,
        }
    }

    /// Release the database pool, if this state owns one
    pub async fn shutdown(&self) {
        if let Some(db) = &self.db {
            db.close().await;
        }
    }
}
