use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use vt_core::services::verification::{
    ClockTrait, CodeStoreTrait, MessageDeliveryTrait, TokenIssuerTrait,
};
use vt_shared::utils::{mask_email, normalize_email};

use super::AppState;
use crate::dto::{SendCodeRequest, SendCodeResponse};
use crate::handlers::{handle_domain_error, handle_validation_errors};

/// Handler for POST /send-code
///
/// Issues a fresh code for the email, replacing any pending one, and emails it.
///
/// # Request Body
///
/// ```json
/// { "email": "driver@fleet.com" }
/// ```
///
/// # Responses
///
/// - `200 OK` with `{"message": "Code sent"}`
/// - `400 Bad Request` with `validation_error` for a malformed email
/// - `503 Service Unavailable` with `delivery_failure` if the email could not be sent
pub async fn send_code<S, D, C, T>(
    state: web::Data<AppState<S, D, C, T>>,
    request: web::Json<SendCodeRequest>,
) -> HttpResponse
where
    S: CodeStoreTrait + 'static,
    D: MessageDeliveryTrait + 'static,
    C: ClockTrait + 'static,
    T: TokenIssuerTrait + 'static,
{
    let request_id = Uuid::new_v4();
    let mut request = request.into_inner();
    request.email = normalize_email(&request.email);

    if let Err(errors) = request.validate() {
        log::warn!("[{}] send_code validation failed: {:?}", request_id, errors);
        return handle_validation_errors(&errors);
    }

    let email = request.email;
    log::info!(
        "[{}] Processing send_code request for {}",
        request_id,
        mask_email(&email)
    );

    match state.verification_service.request_code(&email).await {
        Ok(result) => {
            log::info!(
                "[{}] Code sent to {}, message_id: {}",
                request_id,
                mask_email(&email),
                result.message_id
            );
            HttpResponse::Ok().json(SendCodeResponse {
                message: "Code sent".to_string(),
            })
        }
        Err(error) => {
            log::error!(
                "[{}] Failed to send code to {}: {}",
                request_id,
                mask_email(&email),
                error
            );
            handle_domain_error(error)
        }
    }
}
