#![allow(dead_code)]

pub mod app_builder;
pub mod auth;
pub mod logging;
pub mod test_state;

pub use app_builder::create_test_app;

use actix_web::body::BoxBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::header::CONTENT_TYPE;
use actix_web::test;
use serde_json::Value;

// Logging is auto-installed for every test binary pulling this module in.
#[ctor::ctor]
fn init_logging() {
    logging::init();
}

/// Assert a problem+json error response: status, stable code, detail, and a
/// body trace_id matching the `x-request-id` response header.
pub async fn assert_problem_details(
    resp: ServiceResponse<BoxBody>,
    expected_status: u16,
    expected_code: &str,
    expected_detail: &str,
) {
    assert_eq!(resp.status().as_u16(), expected_status);

    let headers = resp.headers().clone();

    let request_id = headers
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .expect("x-request-id header should be present")
        .to_string();
    assert!(!request_id.is_empty());

    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(
        content_type.starts_with("application/problem+json"),
        "Content-Type must be application/problem+json (got {content_type})"
    );

    let body = test::read_body(resp).await;
    let body_str = std::str::from_utf8(&body).expect("response body should be valid UTF-8");
    let problem: Value = serde_json::from_str(body_str)
        .unwrap_or_else(|_| panic!("failed to parse problem+json body: {body_str}"));

    for key in ["type", "title", "status", "detail", "code", "trace_id"] {
        assert!(problem.get(key).is_some(), "{key} field should be present");
    }

    assert_eq!(problem["code"], expected_code);
    assert_eq!(problem["detail"], expected_detail);
    assert_eq!(problem["status"], expected_status);
    assert_eq!(
        problem["trace_id"].as_str().expect("trace_id should be a string"),
        request_id,
        "trace_id in body should match x-request-id header"
    );
}
