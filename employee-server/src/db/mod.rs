//! Database Module
//!
//! Handles the SQLite connection pool and the employees table schema

pub mod models;
pub mod repository;

use std::str::FromStr;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};

use crate::core::Config;
use repository::{RepoError, RepoResult};

/// Unix millis computed inside SQLite (julianday keeps sub-second precision)
pub(crate) const NOW_MILLIS_SQL: &str =
    "CAST((julianday('now') - 2440587.5) * 86400000 AS INTEGER)";

/// Idempotent schema: one table, uniqueness on email, store-generated ids and timestamps
const SCHEMA: &[&str] = &[
    r#"CREATE TABLE IF NOT EXISTS employees (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        email TEXT NOT NULL UNIQUE,
        position TEXT NOT NULL,
        created_at INTEGER NOT NULL DEFAULT (CAST((julianday('now') - 2440587.5) * 86400000 AS INTEGER)),
        updated_at INTEGER NOT NULL DEFAULT (CAST((julianday('now') - 2440587.5) * 86400000 AS INTEGER))
    )"#,
    "CREATE INDEX IF NOT EXISTS idx_employees_created_at ON employees (created_at)",
];

/// Database service — owns a SQLite connection pool
#[derive(Clone, Debug)]
pub struct DbService {
    pub pool: SqlitePool,
}

impl DbService {
    /// Open (or create) the database described by `config` and ensure the schema
    pub async fn new(config: &Config) -> RepoResult<Self> {
        let pool = if config.is_memory_database() {
            Self::open_memory().await?
        } else {
            Self::open_file(&config.database_path, config.db_max_connections).await?
        };

        let service = Self { pool };
        service.ensure_schema().await?;
        tracing::info!("Employees table ready");
        Ok(service)
    }

    /// Private in-memory database, used by tests and `DATABASE_PATH=:memory:`
    pub async fn in_memory() -> RepoResult<Self> {
        let service = Self {
            pool: Self::open_memory().await?,
        };
        service.ensure_schema().await?;
        Ok(service)
    }

    async fn open_file(db_path: &str, max_connections: u32) -> RepoResult<SqlitePool> {
        // WAL, normal sync, create on first start
        let options = SqliteConnectOptions::from_str(&format!("sqlite:{db_path}"))
            .map_err(|e| RepoError::Database(format!("Invalid database path: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .optimize_on_close(true, None);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await
            .map_err(|e| RepoError::Database(format!("Failed to open database: {e}")))?;

        // busy_timeout: 写冲突时等待 5s 而非立即失败
        sqlx::query("PRAGMA busy_timeout = 5000;").execute(&pool).await?;

        tracing::info!(
            path = %db_path,
            "Connected to SQLite database (WAL, busy_timeout=5000ms)"
        );
        Ok(pool)
    }

    async fn open_memory() -> RepoResult<SqlitePool> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")
            .map_err(|e| RepoError::Database(format!("Invalid database path: {e}")))?;

        // Every connection to :memory: is a separate database, so pin exactly one
        // and never recycle it.
        let pool = SqlitePoolOptions::new()
            .min_connections(1)
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .map_err(|e| RepoError::Database(format!("Failed to open database: {e}")))?;

        tracing::debug!("Connected to in-memory SQLite database");
        Ok(pool)
    }

    /// Create the employees table if absent
    pub async fn ensure_schema(&self) -> RepoResult<()> {
        for statement in SCHEMA {
            sqlx::query(statement).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// Close every pooled connection, waiting for in-flight statements
    pub async fn close(&self) {
        tracing::info!("Closing database connection...");
        self.pool.close().await;
        tracing::info!("Database connection closed");
    }
}
