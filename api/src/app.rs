//! Application factory
//!
//! Builds the actix-web `App` with shared state, middleware and routes so the
//! binary and the integration tests serve the exact same surface.

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware::Logger,
    web, App, Error, HttpResponse,
};

use vt_core::services::verification::{
    ClockTrait, CodeStoreTrait, MessageDeliveryTrait, TokenIssuerTrait,
};
use vt_shared::config::AppConfig;
use vt_shared::types::{ErrorResponse, HealthResponse};

use crate::handlers::json_error_handler;
use crate::middleware::create_cors;
use crate::routes::verification::{send_code::send_code, verify_code::verify_code, AppState};

/// Service name reported by the health endpoint
pub const SERVICE_NAME: &str = "vehicle-tracker-verification";

/// Create and configure the application with all dependencies
pub fn create_app<S, D, C, T>(
    app_state: web::Data<AppState<S, D, C, T>>,
    config: &AppConfig,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
>
where
    S: CodeStoreTrait + 'static,
    D: MessageDeliveryTrait + 'static,
    C: ClockTrait + 'static,
    T: TokenIssuerTrait + 'static,
{
    let json_config = web::JsonConfig::default()
        .limit(config.server.max_payload_size)
        .error_handler(json_error_handler);

    App::new()
        .app_data(app_state)
        .app_data(json_config)
        // Logger is registered last so it also records requests CORS rejects
        .wrap(create_cors(&config.cors))
        .wrap(Logger::default())
        .route("/health", web::get().to(health_check))
        .route("/send-code", web::post().to(send_code::<S, D, C, T>))
        .route("/verify-code", web::post().to(verify_code::<S, D, C, T>))
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse::healthy(
        SERVICE_NAME,
        env!("CARGO_PKG_VERSION"),
    ))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        "not_found",
        "The requested resource was not found",
    ))
}
