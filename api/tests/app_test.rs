//! Tests for the non-verification parts of the HTTP surface

mod common;

use actix_web::{http::StatusCode, test};
use serde_json::Value;

use common::TestContext;
use vt_api::app::{create_app, SERVICE_NAME};

#[actix_web::test]
async fn test_health_check() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.app_config())).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], SERVICE_NAME);
    assert!(body["timestamp"].is_string());
}

#[actix_web::test]
async fn test_unknown_route_returns_not_found() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.app_config())).await;

    let req = test::TestRequest::get().uri("/api/v1/drivers").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "not_found");
}

#[actix_web::test]
async fn test_malformed_json_uses_error_envelope() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.app_config())).await;

    let req = test::TestRequest::post()
        .uri("/send-code")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "validation_error");
}
