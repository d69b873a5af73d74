//! CORS middleware configuration for cross-origin requests.
//!
//! The dashboard is served from a different origin than this service, so the
//! verification endpoints must answer preflight requests. Development accepts
//! any origin; production only accepts the origins listed in `ALLOWED_ORIGINS`.

use actix_cors::Cors;
use actix_web::http::{header, Method};
use vt_shared::config::CorsConfig;

/// Creates a CORS middleware instance from the loaded configuration.
pub fn create_cors(config: &CorsConfig) -> Cors {
    if config.allows_any_origin() {
        create_permissive_cors(config)
    } else {
        create_restricted_cors(config)
    }
}

fn create_permissive_cors(config: &CorsConfig) -> Cors {
    log::info!("Configuring permissive CORS (any origin)");

    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allow_any_header()
        .max_age(config.max_age)
}

fn create_restricted_cors(config: &CorsConfig) -> Cors {
    log::info!(
        "Configuring CORS for {} allowed origin(s)",
        config.allowed_origins.len()
    );

    let mut cors = Cors::default();
    for origin in &config.allowed_origins {
        cors = cors.allowed_origin(origin);
    }

    let cors = cors
        .allowed_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
        .max_age(config.max_age);

    if config.allow_credentials {
        cors.supports_credentials()
    } else {
        cors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, web, App, HttpResponse};

    #[actix_web::test]
    async fn test_permissive_cors_echoes_any_origin() {
        let app = test::init_service(
            App::new()
                .wrap(create_cors(&CorsConfig::development()))
                .route("/health", web::get().to(HttpResponse::Ok)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/health")
            .insert_header((header::ORIGIN, "http://localhost:3000"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert!(resp.status().is_success());
        assert!(resp
            .headers()
            .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
    }

    #[actix_web::test]
    async fn test_restricted_cors_omits_headers_for_unknown_origin() {
        let config = CorsConfig {
            allowed_origins: vec!["https://dashboard.vehicletracker.io".to_string()],
            allow_credentials: true,
            max_age: 600,
        };
        let app = test::init_service(
            App::new()
                .wrap(create_cors(&config))
                .route("/health", web::get().to(HttpResponse::Ok)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/health")
            .insert_header((header::ORIGIN, "https://evil.example.com"))
            .to_request();
        let resp = test::try_call_service(&app, req).await;

        // Depending on the mismatch policy the request is either blocked or served
        // without CORS headers; the browser rejects it in both cases.
        if let Ok(resp) = resp {
            assert!(!resp
                .headers()
                .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
        }
    }
}
