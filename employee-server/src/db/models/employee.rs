//! Employee Model

use shared::models::Employee;
use shared::util::millis_to_datetime;

/// Row of the `employees` table (timestamps as Unix millis)
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct EmployeeRow {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub position: String,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<EmployeeRow> for Employee {
    fn from(row: EmployeeRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            email: row.email,
            position: row.position,
            created_at: millis_to_datetime(row.created_at),
            updated_at: millis_to_datetime(row.updated_at),
        }
    }
}
