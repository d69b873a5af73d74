//! Shared fixtures for the HTTP integration tests

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use actix_web::web;
use chrono::{DateTime, Duration, Utc};

use vt_api::routes::verification::AppState;
use vt_core::services::verification::{ClockTrait, VerificationService, VerificationServiceConfig};
use vt_infra::{EmailDeliveryAdapter, InMemoryCodeStore, MockEmailService, StaticTokenIssuer};
use vt_shared::config::{AppConfig, CorsConfig};

pub const TEST_TOKEN: &str = "driver-token-here";

/// Clock the tests move by hand
#[derive(Clone)]
pub struct ManualClock {
    now: Arc<Mutex<DateTime<Utc>>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            now: Arc::new(Mutex::new(Utc::now())),
        }
    }

    pub fn advance(&self, seconds: i64) {
        let mut now = self.now.lock().unwrap();
        *now = *now + Duration::seconds(seconds);
    }
}

impl ClockTrait for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

pub type TestState = AppState<InMemoryCodeStore, EmailDeliveryAdapter, ManualClock, StaticTokenIssuer>;

/// Everything a test needs to drive and observe the service
pub struct TestContext {
    pub state: web::Data<TestState>,
    pub outbox: MockEmailService,
    pub clock: ManualClock,
    pub store: Arc<InMemoryCodeStore>,
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_mailer(MockEmailService::with_options(false, false))
    }

    pub fn with_failing_mailer() -> Self {
        Self::with_mailer(MockEmailService::with_options(false, true))
    }

    fn with_mailer(outbox: MockEmailService) -> Self {
        let clock = ManualClock::new();
        let store = Arc::new(InMemoryCodeStore::new());
        let service = VerificationService::new(
            store.clone(),
            Arc::new(EmailDeliveryAdapter::new(Box::new(outbox.clone()))),
            Arc::new(clock.clone()),
            Arc::new(StaticTokenIssuer::new(TEST_TOKEN)),
            VerificationServiceConfig::default(),
        );

        Self {
            state: web::Data::new(AppState::new(Arc::new(service))),
            outbox,
            clock,
            store,
        }
    }

    pub fn app_config(&self) -> AppConfig {
        AppConfig {
            cors: CorsConfig::development(),
            ..AppConfig::default()
        }
    }

    /// Code from the most recent email sent to `email`
    pub fn last_code_for(&self, email: &str) -> String {
        let message = self
            .outbox
            .last_message_to(email)
            .expect("no email was sent to this address");
        message
            .body
            .split_whitespace()
            .map(|word| word.trim_end_matches('.'))
            .find(|word| word.len() == 6 && word.chars().all(|c| c.is_ascii_digit()))
            .expect("email body did not contain a code")
            .to_string()
    }
}
