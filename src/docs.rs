use crate::api::attendance::{
    AttendanceListResponse, AttendanceSingleResponse, AttendanceStatus, CreateAttendance,
};
use crate::api::employee::{
    CreateEmployee, DeleteResponse, EmployeeListResponse, EmployeeSingleResponse,
};
use crate::model::attendance::Attendance;
use crate::model::employee::Employee;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "HRMS Lite API",
        version = "1.0.0",
        description = r#"
## HRMS Lite

A lightweight Human Resource Management System for managing employees and tracking attendance.

### Key Features
- **Employee Management**
  - Add, list, and delete employee records
- **Attendance Tracking**
  - Mark daily attendance (Present/Absent) per employee
  - List attendance across the company or per employee

### Response Format
Every response uses the `{success, data | message, count?}` envelope.

---
Built with **Rust**, **Actix Web**, **SQLx**, and **Utoipa**.
"#,
    ),
    paths(
        crate::api::employee::create_employee,
        crate::api::employee::list_employees,
        crate::api::employee::delete_employee,

        crate::api::attendance::mark_attendance,
        crate::api::attendance::list_attendance,
        crate::api::attendance::employee_attendance,

        crate::api::health::index,
        crate::api::health::api_health,
    ),
    components(
        schemas(
            CreateEmployee,
            Employee,
            EmployeeSingleResponse,
            EmployeeListResponse,
            DeleteResponse,
            CreateAttendance,
            AttendanceStatus,
            Attendance,
            AttendanceSingleResponse,
            AttendanceListResponse
        )
    ),
    tags(
        (name = "Employees", description = "Employee management APIs"),
        (name = "Attendance", description = "Attendance tracking APIs"),
        (name = "Health", description = "Service health checks"),
    )
)]
pub struct ApiDoc;
