use actix_web::{HttpResponse, web};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use utoipa::ToSchema;
use validator::Validate;

use crate::crud;
use crate::error::ApiError;
use crate::model::employee::Employee;

#[derive(Deserialize, Serialize, Validate, ToSchema)]
pub struct CreateEmployee {
    #[schema(example = "EMP001", value_type = String)]
    #[validate(length(min = 1, max = 50, message = "must be between 1 and 50 characters"))]
    pub employee_id: String,

    #[schema(example = "Jane Doe", value_type = String)]
    #[validate(length(min = 1, max = 255, message = "must be between 1 and 255 characters"))]
    pub full_name: String,

    #[schema(example = "jane.doe@company.com", format = "email", value_type = String)]
    #[validate(email(message = "value is not a valid email address"))]
    pub email: String,

    #[schema(example = "Engineering", value_type = String)]
    #[validate(length(min = 1, max = 100, message = "must be between 1 and 100 characters"))]
    pub department: String,
}

#[derive(Serialize, ToSchema)]
pub struct EmployeeSingleResponse {
    #[schema(example = true)]
    pub success: bool,
    pub data: Employee,
}

#[derive(Serialize, ToSchema)]
pub struct EmployeeListResponse {
    #[schema(example = true)]
    pub success: bool,
    pub data: Vec<Employee>,
    #[schema(example = 1)]
    pub count: usize,
}

#[derive(Serialize, ToSchema)]
pub struct DeleteResponse {
    #[schema(example = true)]
    pub success: bool,
    #[schema(example = "Employee 'Jane Doe' (ID: EMP001) deleted successfully.")]
    pub message: String,
}

/// Add a new employee
#[utoipa::path(
    post,
    path = "/api/employees",
    request_body = CreateEmployee,
    responses(
        (status = 201, description = "Employee created successfully", body = EmployeeSingleResponse),
        (status = 409, description = "Duplicate employee_id or email", body = Object, example = json!({
            "success": false,
            "message": "Employee with ID 'EMP001' already exists."
        })),
        (status = 422, description = "Validation error", body = Object, example = json!({
            "success": false,
            "message": "Validation error",
            "errors": ["email: value is not a valid email address"]
        }))
    ),
    tag = "Employees"
)]
pub async fn create_employee(
    pool: web::Data<SqlitePool>,
    payload: web::Json<CreateEmployee>,
) -> Result<HttpResponse, ApiError> {
    payload.validate()?;

    let employee = crud::employee::create_employee(pool.get_ref(), &payload).await?;

    Ok(HttpResponse::Created().json(EmployeeSingleResponse {
        success: true,
        data: employee,
    }))
}

/// Get all employees
#[utoipa::path(
    get,
    path = "/api/employees",
    responses(
        (status = 200, description = "All employees, newest first", body = EmployeeListResponse)
    ),
    tag = "Employees"
)]
pub async fn list_employees(pool: web::Data<SqlitePool>) -> Result<HttpResponse, ApiError> {
    let employees = crud::employee::get_all_employees(pool.get_ref()).await?;

    Ok(HttpResponse::Ok().json(EmployeeListResponse {
        success: true,
        count: employees.len(),
        data: employees,
    }))
}

/// Delete an employee
#[utoipa::path(
    delete,
    path = "/api/employees/{id}",
    params(
        ("id", Path, description = "Employee database ID")
    ),
    responses(
        (status = 200, description = "Employee and its attendance records deleted", body = DeleteResponse),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "success": false,
            "message": "Employee with ID 42 not found."
        }))
    ),
    tag = "Employees"
)]
pub async fn delete_employee(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();

    let employee = crud::employee::delete_employee(pool.get_ref(), id).await?;

    Ok(HttpResponse::Ok().json(DeleteResponse {
        success: true,
        message: format!(
            "Employee '{}' (ID: {}) deleted successfully.",
            employee.full_name, employee.employee_id
        ),
    }))
}

#[cfg(test)]
mod tests {
    use crate::api::test_utils::test_app;
    use crate::db;
    use actix_web::http::StatusCode;
    use actix_web::test;
    use serde_json::{Value, json};

    fn employee_json(employee_id: &str, email: &str) -> Value {
        json!({
            "employee_id": employee_id,
            "full_name": "Jane Doe",
            "email": email,
            "department": "Engineering"
        })
    }

    #[actix_web::test]
    async fn created_employee_is_listed() {
        let pool = db::test_pool().await;
        let app = test_app!(pool);

        let req = test::TestRequest::post()
            .uri("/api/employees")
            .set_json(employee_json("EMP001", "jane@co.com"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], json!(true));
        assert_eq!(body["data"]["employee_id"], json!("EMP001"));
        assert!(body["data"]["id"].is_i64());
        assert!(body["data"]["created_at"].is_string());

        let req = test::TestRequest::get().uri("/api/employees").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["count"], json!(1));
        assert_eq!(body["data"][0]["email"], json!("jane@co.com"));
    }

    #[actix_web::test]
    async fn duplicate_employee_id_is_a_conflict() {
        let pool = db::test_pool().await;
        let app = test_app!(pool);

        let req = test::TestRequest::post()
            .uri("/api/employees")
            .set_json(employee_json("EMP001", "jane@co.com"))
            .to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::CREATED
        );

        let req = test::TestRequest::post()
            .uri("/api/employees")
            .set_json(employee_json("EMP001", "other@co.com"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CONFLICT);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], json!(false));
        assert_eq!(
            body["message"],
            json!("Employee with ID 'EMP001' already exists.")
        );
    }

    #[actix_web::test]
    async fn duplicate_email_is_a_conflict() {
        let pool = db::test_pool().await;
        let app = test_app!(pool);

        let req = test::TestRequest::post()
            .uri("/api/employees")
            .set_json(employee_json("EMP001", "jane@co.com"))
            .to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::CREATED
        );

        let req = test::TestRequest::post()
            .uri("/api/employees")
            .set_json(employee_json("EMP002", "jane@co.com"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CONFLICT);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body["message"],
            json!("Employee with email 'jane@co.com' already exists.")
        );
    }

    #[actix_web::test]
    async fn invalid_fields_fail_validation_before_the_database() {
        let pool = db::test_pool().await;
        let app = test_app!(pool);

        let req = test::TestRequest::post()
            .uri("/api/employees")
            .set_json(json!({
                "employee_id": "EMP001",
                "full_name": "",
                "email": "not-an-email",
                "department": "Engineering"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], json!(false));
        assert_eq!(body["message"], json!("Validation error"));
        assert_eq!(
            body["errors"],
            json!([
                "email: value is not a valid email address",
                "full_name: must be between 1 and 255 characters"
            ])
        );

        // nothing was persisted
        let req = test::TestRequest::get().uri("/api/employees").to_request();
        let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
        assert_eq!(body["count"], json!(0));
    }

    #[actix_web::test]
    async fn deleting_an_employee_cascades_to_attendance() {
        let pool = db::test_pool().await;
        let app = test_app!(pool);

        let req = test::TestRequest::post()
            .uri("/api/employees")
            .set_json(employee_json("EMP001", "jane@co.com"))
            .to_request();
        let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
        let id = body["data"]["id"].as_i64().unwrap();

        let req = test::TestRequest::post()
            .uri("/api/attendance")
            .set_json(json!({
                "employee_id": "EMP001",
                "date": "2026-02-20",
                "status": "Present"
            }))
            .to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::CREATED
        );

        let req = test::TestRequest::delete()
            .uri(&format!("/api/employees/{id}"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body["message"],
            json!("Employee 'Jane Doe' (ID: EMP001) deleted successfully.")
        );

        let req = test::TestRequest::get().uri("/api/attendance").to_request();
        let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
        assert_eq!(body["count"], json!(0));

        let req = test::TestRequest::get()
            .uri("/api/attendance/EMP001")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn deleting_a_missing_employee_is_not_found() {
        let pool = db::test_pool().await;
        let app = test_app!(pool);

        let req = test::TestRequest::delete()
            .uri("/api/employees/999")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], json!("Employee with ID 999 not found."));
    }
}
