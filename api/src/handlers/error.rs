use actix_web::{error::InternalError, error::JsonPayloadError, HttpRequest, HttpResponse};
use std::collections::HashMap;
use validator::ValidationErrors;

use vt_core::errors::{DomainError, VerificationError};
use vt_shared::types::ErrorResponse;

const DELIVERY_FAILURE_MESSAGE: &str = "Failed to send verification code. Please try again later";

/// Handle domain errors and convert them to appropriate HTTP responses
///
/// Verification outcomes are client errors; only delivery trouble is reported
/// as service unavailability. Internal details are logged, never returned.
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    match error {
        DomainError::Verification(verification_error) => {
            let code = verification_error.code();
            match verification_error {
                VerificationError::DeliveryFailure { reason } => {
                    log::error!("Verification code delivery failed: {}", reason);
                    HttpResponse::ServiceUnavailable()
                        .json(ErrorResponse::new(code, DELIVERY_FAILURE_MESSAGE))
                }
                other => {
                    log::debug!("Verification rejected: {}", other);
                    HttpResponse::BadRequest().json(ErrorResponse::new(code, other.to_string()))
                }
            }
        }
        DomainError::Validation { message } => {
            HttpResponse::BadRequest().json(ErrorResponse::new("validation_error", message))
        }
        DomainError::Internal { message } => {
            log::error!("Internal error: {}", message);
            HttpResponse::InternalServerError().json(ErrorResponse::new(
                "internal_error",
                "An internal error occurred",
            ))
        }
    }
}

/// Convert `validator` failures into a 400 with per-field messages
pub fn handle_validation_errors(errors: &ValidationErrors) -> HttpResponse {
    let mut details = HashMap::new();
    for (field, field_errors) in errors.field_errors() {
        let messages: Vec<String> = field_errors
            .iter()
            .map(|e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string())
            })
            .collect();
        details.insert(field.to_string(), serde_json::json!(messages));
    }

    HttpResponse::BadRequest().json(
        ErrorResponse::new("validation_error", "Invalid request data").with_details(details),
    )
}

/// Reject malformed or mistyped JSON bodies with the standard error envelope
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    log::warn!("Rejected request body for {}: {}", req.path(), err);

    let response = HttpResponse::BadRequest().json(ErrorResponse::new(
        "validation_error",
        format!("Invalid request body: {}", err),
    ));
    InternalError::from_response(err, response).into()
}
