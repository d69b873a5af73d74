use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;
use env_logger::fmt::TimestampPrecision;
use log::{info, warn};

use vt_api::app::{create_app, SERVICE_NAME};
use vt_api::config::Config;
use vt_api::routes::verification::AppState;
use vt_core::services::verification::VerificationService;
use vt_infra::{EmailDeliveryAdapter, InMemoryCodeStore, StaticTokenIssuer, SystemClock};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env().context("Failed to load configuration")?;

    let logging = &config.app.logging;
    env_logger::Builder::from_env(env_logger::Env::new().default_filter_or(logging.level.as_str()))
        .format_timestamp(logging.timestamp.then_some(TimestampPrecision::Millis))
        .format_module_path(logging.module_path)
        .init();

    info!(
        "Starting {} v{} ({})",
        SERVICE_NAME,
        env!("CARGO_PKG_VERSION"),
        config.app.environment
    );

    let delivery = EmailDeliveryAdapter::from_config(&config.infra.email)
        .context("Failed to initialize email delivery")?;
    info!("Email delivery provider: {}", delivery.provider_name());
    if !delivery.is_available().await {
        warn!(
            "Email provider {} is not reachable; send-code requests will fail until it is",
            delivery.provider_name()
        );
    }
    info!(
        "Verification codes expire after {} seconds",
        config.verification.code_ttl_seconds
    );

    let verification_service = Arc::new(VerificationService::new(
        Arc::new(InMemoryCodeStore::new()),
        Arc::new(delivery),
        Arc::new(SystemClock),
        Arc::new(StaticTokenIssuer::from_config(&config.infra.token)),
        config.verification.clone(),
    ));
    let app_state = web::Data::new(AppState::new(verification_service));

    let bind_address = config.bind_address();
    info!("Server will bind to: {}", bind_address);

    let app_config = config.app.clone();
    let mut server = HttpServer::new(move || create_app(app_state.clone(), &app_config))
        .keep_alive(std::time::Duration::from_secs(config.app.server.keep_alive));
    if config.app.server.workers > 0 {
        server = server.workers(config.app.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("Failed to bind to {}", bind_address))?
        .run()
        .await
        .context("Server terminated with an error")
}
