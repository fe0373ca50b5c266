//! Employee Repository

use async_trait::async_trait;
use shared::models::Employee;
use shared::validation::ValidEmployee;
use sqlx::SqlitePool;

use super::{EmployeeStore, RepoError, RepoResult};
use crate::db::NOW_MILLIS_SQL;
use crate::db::models::EmployeeRow;

const SELECT_COLUMNS: &str = "SELECT id, name, email, position, created_at, updated_at FROM employees";

#[derive(Clone)]
pub struct EmployeeRepository {
    pool: SqlitePool,
}

impl EmployeeRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn fetch_row(&self, id: i64) -> RepoResult<Option<Employee>> {
        let row: Option<EmployeeRow> = sqlx::query_as(&format!("{SELECT_COLUMNS} WHERE id = ?"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(Employee::from))
    }

    /// Follow-up read after a successful write
    async fn read_back(&self, id: i64) -> RepoResult<Employee> {
        self.fetch_row(id)
            .await
            .map_err(|e| RepoError::ReadBack(e.to_string()))?
            .ok_or_else(|| RepoError::ReadBack(format!("Employee {id} vanished after write")))
    }
}

#[async_trait]
impl EmployeeStore for EmployeeRepository {
    async fn find_all(&self) -> RepoResult<Vec<Employee>> {
        // Millisecond ties are broken by id so insertion order still wins
        let rows: Vec<EmployeeRow> =
            sqlx::query_as(&format!("{SELECT_COLUMNS} ORDER BY created_at DESC, id DESC"))
                .fetch_all(&self.pool)
                .await?;
        Ok(rows.into_iter().map(Employee::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Employee>> {
        self.fetch_row(id).await
    }

    async fn create(&self, data: &ValidEmployee) -> RepoResult<Employee> {
        let result = sqlx::query("INSERT INTO employees (name, email, position) VALUES (?, ?, ?)")
            .bind(&data.name)
            .bind(&data.email)
            .bind(&data.position)
            .execute(&self.pool)
            .await?;

        self.read_back(result.last_insert_rowid()).await
    }

    async fn update(&self, id: i64, data: &ValidEmployee) -> RepoResult<Option<Employee>> {
        let sql = format!(
            "UPDATE employees SET name = ?, email = ?, position = ?, updated_at = {NOW_MILLIS_SQL} WHERE id = ?"
        );
        let result = sqlx::query(&sql)
            .bind(&data.name)
            .bind(&data.email)
            .bind(&data.position)
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }
        self.read_back(id).await.map(Some)
    }

    async fn delete(&self, id: i64) -> RepoResult<bool> {
        let result = sqlx::query("DELETE FROM employees WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
