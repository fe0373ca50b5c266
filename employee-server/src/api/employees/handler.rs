//! Employee API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use shared::models::{Employee, EmployeeInput};
use shared::response::DeleteResponse;
use shared::validation::validate_employee;

use crate::core::ServerState;
use crate::db::repository::RepoError;
use crate::utils::{AppError, AppJson, AppResult};

/// Path ids are free text; anything that is not an integer names no record
fn parse_id(raw: &str) -> AppResult<i64> {
    raw.parse().map_err(|_| AppError::employee_not_found())
}

/// List all employees, newest first
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Employee>>> {
    let employees = state
        .employees
        .find_all()
        .await
        .map_err(|e| AppError::database("Failed to fetch employees", e))?;
    Ok(Json(employees))
}

/// Get employee by id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Employee>> {
    let id = parse_id(&id)?;
    let employee = state
        .employees
        .find_by_id(id)
        .await
        .map_err(|e| AppError::database("Failed to fetch employee", e))?
        .ok_or_else(AppError::employee_not_found)?;
    Ok(Json(employee))
}

/// Create a new employee
pub async fn create(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<EmployeeInput>,
) -> AppResult<(StatusCode, Json<Employee>)> {
    let valid = validate_employee(&payload)?;
    let employee = state.employees.create(&valid).await.map_err(|e| match e {
        e @ RepoError::ReadBack(_) => {
            AppError::database("Employee created but failed to fetch", e)
        }
        e => AppError::from_write("Failed to create employee", e),
    })?;

    tracing::info!(id = employee.id, "Employee created");
    Ok((StatusCode::CREATED, Json(employee)))
}

/// Update an employee (full replace of name/email/position)
///
/// An unknown id is reported before the body is looked at.
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    payload: Result<AppJson<EmployeeInput>, AppError>,
) -> AppResult<Json<Employee>> {
    let id = parse_id(&id)?;
    state
        .employees
        .find_by_id(id)
        .await
        .map_err(|e| AppError::database("Failed to update employee", e))?
        .ok_or_else(AppError::employee_not_found)?;

    let AppJson(payload) = payload?;
    let valid = validate_employee(&payload)?;

    let employee = state
        .employees
        .update(id, &valid)
        .await
        .map_err(|e| match e {
            e @ RepoError::ReadBack(_) => {
                AppError::database("Employee updated but failed to fetch", e)
            }
            e => AppError::from_write("Failed to update employee", e),
        })?
        // Deleted between the existence check and the write
        .ok_or_else(AppError::employee_not_found)?;

    tracing::info!(id, "Employee updated");
    Ok(Json(employee))
}

/// Hard delete an employee
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<DeleteResponse>> {
    let numeric = parse_id(&id)?;
    let removed = state
        .employees
        .delete(numeric)
        .await
        .map_err(|e| AppError::database("Failed to delete employee", e))?;

    if !removed {
        return Err(AppError::employee_not_found());
    }

    tracing::info!(id = numeric, "Employee deleted");
    Ok(Json(DeleteResponse::new(id)))
}
