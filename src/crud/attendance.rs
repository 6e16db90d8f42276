use sqlx::SqlitePool;
use tracing::{error, info};

use crate::api::attendance::CreateAttendance;
use crate::crud::employee::get_employee_by_employee_id;
use crate::error::ApiError;
use crate::model::attendance::Attendance;

/// Mark attendance for an employee: the employee must exist and the
/// (employee, date) pair must be new.
pub async fn create_attendance(
    pool: &SqlitePool,
    payload: &CreateAttendance,
) -> Result<Attendance, ApiError> {
    if get_employee_by_employee_id(pool, &payload.employee_id)
        .await?
        .is_none()
    {
        return Err(ApiError::NotFound(format!(
            "Employee with ID '{}' does not exist.",
            payload.employee_id
        )));
    }

    let existing = sqlx::query_as::<_, Attendance>(
        "SELECT * FROM attendance WHERE employee_id = ? AND date = ?",
    )
    .bind(&payload.employee_id)
    .bind(payload.date)
    .fetch_optional(pool)
    .await?;
    if existing.is_some() {
        return Err(ApiError::Conflict(format!(
            "Attendance for employee '{}' on {} already exists.",
            payload.employee_id, payload.date
        )));
    }

    let result = sqlx::query(
        r#"
        INSERT INTO attendance (employee_id, date, status)
        VALUES (?, ?, ?)
        "#,
    )
    .bind(&payload.employee_id)
    .bind(payload.date)
    .bind(payload.status.as_str())
    .execute(pool)
    .await;

    let inserted = match result {
        Ok(res) => res,
        Err(e) => {
            // Duplicate that slipped past the check above
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    error!(error = %db_err, "Unique constraint hit marking attendance");
                    return Err(ApiError::Conflict("Duplicate attendance entry.".to_string()));
                }
            }
            return Err(e.into());
        }
    };

    let attendance = sqlx::query_as::<_, Attendance>("SELECT * FROM attendance WHERE id = ?")
        .bind(inserted.last_insert_rowid())
        .fetch_one(pool)
        .await?;

    info!(
        employee_id = %attendance.employee_id,
        date = %attendance.date,
        status = %attendance.status,
        "Marked attendance"
    );
    Ok(attendance)
}

/// All attendance records across employees, most recent date first.
pub async fn get_all_attendance(pool: &SqlitePool) -> Result<Vec<Attendance>, ApiError> {
    let records = sqlx::query_as::<_, Attendance>(
        "SELECT * FROM attendance ORDER BY date DESC, id DESC",
    )
    .fetch_all(pool)
    .await?;

    Ok(records)
}

/// One employee's attendance, most recent date first. The employee must exist.
pub async fn get_attendance_by_employee(
    pool: &SqlitePool,
    employee_id: &str,
) -> Result<Vec<Attendance>, ApiError> {
    if get_employee_by_employee_id(pool, employee_id)
        .await?
        .is_none()
    {
        return Err(ApiError::NotFound(format!(
            "Employee with ID '{employee_id}' does not exist."
        )));
    }

    let records = sqlx::query_as::<_, Attendance>(
        "SELECT * FROM attendance WHERE employee_id = ? ORDER BY date DESC, id DESC",
    )
    .bind(employee_id)
    .fetch_all(pool)
    .await?;

    Ok(records)
}
