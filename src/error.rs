use actix_web::error::JsonPayloadError;
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, ResponseError};
use serde_json::json;
use tracing::error;
use validator::ValidationErrors;

/// Error taxonomy for the whole API. Every variant renders the
/// `{success: false, message, ...}` envelope.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Validation error")]
    Validation(Vec<String>),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::Validation(errors) => HttpResponse::UnprocessableEntity().json(json!({
                "success": false,
                "message": "Validation error",
                "errors": errors,
            })),
            ApiError::NotFound(message) => HttpResponse::NotFound().json(json!({
                "success": false,
                "message": message,
            })),
            ApiError::Conflict(message) => HttpResponse::Conflict().json(json!({
                "success": false,
                "message": message,
            })),
            ApiError::Database(e) => {
                // full detail stays server-side
                error!(error = %e, "Unhandled database error");
                HttpResponse::InternalServerError().json(json!({
                    "success": false,
                    "message": "An internal server error occurred. Please try again later.",
                }))
            }
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        let mut messages: Vec<String> = errors
            .field_errors()
            .iter()
            .flat_map(|(field, field_errors)| {
                field_errors.iter().map(move |err| {
                    let detail = err
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| err.code.to_string());
                    format!("{field}: {detail}")
                })
            })
            .collect();
        messages.sort();
        ApiError::Validation(messages)
    }
}

/// Malformed request bodies (bad JSON, wrong types, unknown enum variants)
/// get the same 422 envelope as rule-level validation failures.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let response = HttpResponse::UnprocessableEntity().json(json!({
        "success": false,
        "message": "Validation error",
        "errors": [err.to_string()],
    }));
    actix_web::error::InternalError::from_response(err, response).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Probe {
        #[validate(length(min = 1, message = "must not be empty"))]
        name: String,
        #[validate(email(message = "value is not a valid email address"))]
        email: String,
    }

    #[test]
    fn status_codes_follow_the_taxonomy() {
        assert_eq!(
            ApiError::Validation(vec![]).status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ApiError::NotFound("missing".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Conflict("duplicate".into()).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ApiError::Database(sqlx::Error::PoolTimedOut).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn validation_errors_flatten_to_field_messages() {
        let probe = Probe {
            name: String::new(),
            email: "not-an-email".into(),
        };

        let err: ApiError = probe.validate().unwrap_err().into();
        match err {
            ApiError::Validation(messages) => {
                assert_eq!(
                    messages,
                    vec![
                        "email: value is not a valid email address".to_string(),
                        "name: must not be empty".to_string(),
                    ]
                );
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }
}
