use sqlx::SqlitePool;
use tracing::{error, info};

use crate::api::employee::CreateEmployee;
use crate::error::ApiError;
use crate::model::employee::Employee;

/// Create a new employee after checking both uniqueness rules.
pub async fn create_employee(
    pool: &SqlitePool,
    payload: &CreateEmployee,
) -> Result<Employee, ApiError> {
    if get_employee_by_employee_id(pool, &payload.employee_id)
        .await?
        .is_some()
    {
        return Err(ApiError::Conflict(format!(
            "Employee with ID '{}' already exists.",
            payload.employee_id
        )));
    }

    let by_email = sqlx::query_as::<_, Employee>("SELECT * FROM employees WHERE email = ?")
        .bind(&payload.email)
        .fetch_optional(pool)
        .await?;
    if by_email.is_some() {
        return Err(ApiError::Conflict(format!(
            "Employee with email '{}' already exists.",
            payload.email
        )));
    }

    let result = sqlx::query(
        r#"
        INSERT INTO employees (employee_id, full_name, email, department)
        VALUES (?, ?, ?, ?)
        "#,
    )
    .bind(&payload.employee_id)
    .bind(&payload.full_name)
    .bind(&payload.email)
    .bind(&payload.department)
    .execute(pool)
    .await;

    let inserted = match result {
        Ok(res) => res,
        Err(e) => {
            // A concurrent insert can still trip the constraint between the
            // checks above and this statement.
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    error!(error = %db_err, "Unique constraint hit creating employee");
                    return Err(ApiError::Conflict(
                        "Duplicate employee record. Check employee_id and email.".to_string(),
                    ));
                }
            }
            return Err(e.into());
        }
    };

    // Re-read for the server-assigned id and created_at
    let employee = sqlx::query_as::<_, Employee>("SELECT * FROM employees WHERE id = ?")
        .bind(inserted.last_insert_rowid())
        .fetch_one(pool)
        .await?;

    info!(employee_id = %employee.employee_id, "Created employee");
    Ok(employee)
}

/// All employees, newest creation first. Same-timestamp rows fall back to
/// insert order via the id.
pub async fn get_all_employees(pool: &SqlitePool) -> Result<Vec<Employee>, ApiError> {
    let employees = sqlx::query_as::<_, Employee>(
        "SELECT * FROM employees ORDER BY created_at DESC, id DESC",
    )
    .fetch_all(pool)
    .await?;

    Ok(employees)
}

pub async fn get_employee_by_employee_id(
    pool: &SqlitePool,
    employee_id: &str,
) -> Result<Option<Employee>, ApiError> {
    let employee = sqlx::query_as::<_, Employee>("SELECT * FROM employees WHERE employee_id = ?")
        .bind(employee_id)
        .fetch_optional(pool)
        .await?;

    Ok(employee)
}

/// Delete by surrogate id, returning the deleted record. Attendance rows go
/// with it through the schema's ON DELETE CASCADE.
pub async fn delete_employee(pool: &SqlitePool, id: i64) -> Result<Employee, ApiError> {
    let employee = sqlx::query_as::<_, Employee>("SELECT * FROM employees WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Employee with ID {id} not found.")))?;

    sqlx::query("DELETE FROM employees WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    info!(employee_id = %employee.employee_id, "Deleted employee");
    Ok(employee)
}
