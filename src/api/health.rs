use actix_web::{HttpResponse, Responder, web};
use serde_json::json;

use crate::config::Config;

/// Root health check
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service is running", body = Object, example = json!({
            "success": true,
            "message": "HRMS Lite v1.0.0 is running."
        }))
    ),
    tag = "Health"
)]
pub async fn index(config: web::Data<Config>) -> impl Responder {
    HttpResponse::Ok().json(json!({
        "success": true,
        "message": format!("{} v{} is running.", config.app_name, config.app_version),
    }))
}

/// API health check
#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "API is healthy", body = Object, example = json!({
            "success": true,
            "message": "API is healthy.",
            "version": "1.0.0"
        }))
    ),
    tag = "Health"
)]
pub async fn api_health(config: web::Data<Config>) -> impl Responder {
    HttpResponse::Ok().json(json!({
        "success": true,
        "message": "API is healthy.",
        "version": config.app_version,
    }))
}
