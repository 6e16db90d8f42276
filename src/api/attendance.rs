use actix_web::{HttpResponse, web};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use utoipa::ToSchema;
use validator::Validate;

use crate::crud;
use crate::error::ApiError;
use crate::model::attendance::Attendance;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub enum AttendanceStatus {
    Present,
    Absent,
}

impl AttendanceStatus {
    pub fn as_str(&self) -> &str {
        match self {
            AttendanceStatus::Present => "Present",
            AttendanceStatus::Absent => "Absent",
        }
    }
}

#[derive(Deserialize, Serialize, Validate, ToSchema)]
pub struct CreateAttendance {
    #[schema(example = "EMP001", value_type = String)]
    #[validate(length(min = 1, max = 50, message = "must be between 1 and 50 characters"))]
    pub employee_id: String,

    #[schema(example = "2026-02-20", format = "date", value_type = String)]
    pub date: NaiveDate,

    // serde rejects anything outside {Present, Absent} with a message that
    // names both variants
    #[schema(example = "Present")]
    pub status: AttendanceStatus,
}

#[derive(Serialize, ToSchema)]
pub struct AttendanceSingleResponse {
    #[schema(example = true)]
    pub success: bool,
    pub data: Attendance,
}

#[derive(Serialize, ToSchema)]
pub struct AttendanceListResponse {
    #[schema(example = true)]
    pub success: bool,
    pub data: Vec<Attendance>,
    #[schema(example = 1)]
    pub count: usize,
}

/// Mark attendance
#[utoipa::path(
    post,
    path = "/api/attendance",
    request_body = CreateAttendance,
    responses(
        (status = 201, description = "Attendance marked", body = AttendanceSingleResponse),
        (status = 404, description = "Employee does not exist", body = Object, example = json!({
            "success": false,
            "message": "Employee with ID 'EMP999' does not exist."
        })),
        (status = 409, description = "Attendance already marked for that date", body = Object, example = json!({
            "success": false,
            "message": "Attendance for employee 'EMP001' on 2026-02-20 already exists."
        })),
        (status = 422, description = "Validation error", body = Object, example = json!({
            "success": false,
            "message": "Validation error",
            "errors": ["unknown variant `Late`, expected `Present` or `Absent`"]
        }))
    ),
    tag = "Attendance"
)]
pub async fn mark_attendance(
    pool: web::Data<SqlitePool>,
    payload: web::Json<CreateAttendance>,
) -> Result<HttpResponse, ApiError> {
    payload.validate()?;

    let attendance = crud::attendance::create_attendance(pool.get_ref(), &payload).await?;

    Ok(HttpResponse::Created().json(AttendanceSingleResponse {
        success: true,
        data: attendance,
    }))
}

/// Get all attendance records
#[utoipa::path(
    get,
    path = "/api/attendance",
    responses(
        (status = 200, description = "All attendance records, most recent date first", body = AttendanceListResponse)
    ),
    tag = "Attendance"
)]
pub async fn list_attendance(pool: web::Data<SqlitePool>) -> Result<HttpResponse, ApiError> {
    let records = crud::attendance::get_all_attendance(pool.get_ref()).await?;

    Ok(HttpResponse::Ok().json(AttendanceListResponse {
        success: true,
        count: records.len(),
        data: records,
    }))
}

/// Get attendance by employee
#[utoipa::path(
    get,
    path = "/api/attendance/{employee_id}",
    params(
        ("employee_id", Path, description = "Business employee ID")
    ),
    responses(
        (status = 200, description = "The employee's attendance records", body = AttendanceListResponse),
        (status = 404, description = "Employee does not exist", body = Object, example = json!({
            "success": false,
            "message": "Employee with ID 'EMP999' does not exist."
        }))
    ),
    tag = "Attendance"
)]
pub async fn employee_attendance(
    pool: web::Data<SqlitePool>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let employee_id = path.into_inner();

    let records = crud::attendance::get_attendance_by_employee(pool.get_ref(), &employee_id).await?;

    Ok(HttpResponse::Ok().json(AttendanceListResponse {
        success: true,
        count: records.len(),
        data: records,
    }))
}
