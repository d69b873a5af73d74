//! Unit tests for mock email service

use crate::email::{EmailService, MockEmailService};
use crate::InfrastructureError;

#[tokio::test]
async fn test_mock_email_send_success() {
    let service = MockEmailService::with_options(false, false);
    let message_id = service
        .send_email("a@b.com", "Subject", "Your verification code is 482913.")
        .await
        .unwrap();

    assert!(message_id.starts_with("mock_"));
    assert_eq!(service.get_message_count(), 1);

    let sent = service.last_message_to("a@b.com").unwrap();
    assert_eq!(sent.subject, "Subject");
    assert!(sent.body.contains("482913"));
}

#[tokio::test]
async fn test_mock_email_simulate_failure() {
    let mut service = MockEmailService::with_options(false, false);
    service.set_simulate_failure(true);

    let result = service.send_email("a@b.com", "Subject", "Body").await;
    assert!(matches!(result, Err(InfrastructureError::Email(_))));
    assert!(!service.is_available().await);
    assert_eq!(service.get_message_count(), 0);
    assert!(service.sent_messages().is_empty());
}

#[tokio::test]
async fn test_mock_email_keeps_order() {
    let service = MockEmailService::with_options(false, false);
    for i in 1..=3 {
        service
            .send_email("a@b.com", &format!("Message {}", i), "Body")
            .await
            .unwrap();
    }

    assert_eq!(service.get_message_count(), 3);
    assert_eq!(service.last_message_to("a@b.com").unwrap().subject, "Message 3");
    assert!(service.last_message_to("c@d.com").is_none());
}

#[tokio::test]
async fn test_clones_share_outbox() {
    let service = MockEmailService::with_options(false, false);
    let clone = service.clone();
    clone.send_email("a@b.com", "Subject", "Body").await.unwrap();
    assert_eq!(service.get_message_count(), 1);
}
