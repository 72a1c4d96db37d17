mod support;

use std::time::Duration;

use actix_web::test;
use serde_json::json;
use support::auth::{mint_test_token, token_cookie};
use support::test_state::{build_test_state, create_user, test_security_config};
use support::{assert_problem_details, create_test_app};

#[actix_web::test]
async fn test_message_create_and_list_newest_first() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let user = create_user(&state, "owner@example.com", "hunter2hunter2").await?;
    let token = mint_test_token(&user.id.to_string(), "owner@example.com", &test_security_config());
    let app = create_test_app(state).with_prod_routes().build().await?;

    for subject in ["first", "second"] {
        let req = test::TestRequest::post()
            .uri("/api/messages")
            .cookie(token_cookie(&token))
            .set_json(json!({
                "sender_email": "visitor@example.com",
                "subject": subject,
                "content": "Hello"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 201);

        // Distinct created_at timestamps so the ordering is deterministic.
        tokio::time::sleep(Duration::from_millis(5)).await;
    }

    let req = test::TestRequest::get()
        .uri("/api/messages")
        .cookie(token_cookie(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);

    let body: serde_json::Value = test::read_body_json(resp).await;
    let messages = body.as_array().expect("response should be an array");
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0]["subject"], "second");
    assert_eq!(messages[1]["subject"], "first");

    Ok(())
}

#[actix_web::test]
async fn test_message_create_requires_all_fields() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let user = create_user(&state, "owner@example.com", "hunter2hunter2").await?;
    let token = mint_test_token(&user.id.to_string(), "owner@example.com", &test_security_config());
    let app = create_test_app(state).with_prod_routes().build().await?;

    for body in [
        json!({ "sender_email": "", "subject": "s", "content": "c" }),
        json!({ "sender_email": "v@example.com", "subject": "", "content": "c" }),
        json!({ "sender_email": "v@example.com", "subject": "s", "content": "" }),
        json!({}),
    ] {
        let req = test::TestRequest::post()
            .uri("/api/messages")
            .cookie(token_cookie(&token))
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_problem_details(
            resp,
            400,
            "MISSING_FIELD",
            "Sender email, subject and content are required",
        )
        .await;
    }

    Ok(())
}

#[actix_web::test]
async fn test_inboxes_are_per_user() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let owner = create_user(&state, "owner@example.com", "hunter2hunter2").await?;
    let other = create_user(&state, "other@example.com", "hunter2hunter2").await?;

    folio_backend::repos::messages::create(&state.db, other.id, "v@example.com", "not yours", "x")
        .await?;

    let token = mint_test_token(&owner.id.to_string(), "owner@example.com", &test_security_config());
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::get()
        .uri("/api/messages")
        .cookie(token_cookie(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body.as_array().map(Vec::len), Some(0));

    Ok(())
}
