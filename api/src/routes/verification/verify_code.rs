use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use vt_core::services::verification::{
    ClockTrait, CodeStoreTrait, MessageDeliveryTrait, TokenIssuerTrait,
};
use vt_shared::utils::{mask_email, normalize_email};

use super::AppState;
use crate::dto::{VerifyCodeRequest, VerifyCodeResponse};
use crate::handlers::{handle_domain_error, handle_validation_errors};

/// Handler for POST /verify-code
///
/// # Request Body
///
/// ```json
/// { "email": "driver@fleet.com", "code": "482913" }
/// ```
///
/// # Responses
///
/// - `200 OK` with `{"success": true, "token": "..."}`; the code is consumed
/// - `400 Bad Request` with `code_not_found`, `code_expired` or `invalid_code`
pub async fn verify_code<S, D, C, T>(
    state: web::Data<AppState<S, D, C, T>>,
    request: web::Json<VerifyCodeRequest>,
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
        log::warn!("[{}] verify_code validation failed: {:?}", request_id, errors);
        return handle_validation_errors(&errors);
    }

    let email = request.email;
    log::info!(
        "[{}] Processing verify_code request for {}",
        request_id,
        mask_email(&email)
    );

    match state.verification_service.verify_code(&email, &request.code).await {
        Ok(result) => {
            log::info!("[{}] Code verified for {}", request_id, mask_email(&email));
            HttpResponse::Ok().json(VerifyCodeResponse {
                success: result.success,
                token: result.token,
            })
        }
        Err(error) => {
            log::warn!(
                "[{}] Verification failed for {}: {}",
                request_id,
                mask_email(&email),
                error
            );
            handle_domain_error(error)
        }
    }
}
