mod support;

use actix_web::test;
use serde_json::json;
use support::auth::{mint_test_token, token_cookie};
use support::test_state::{build_test_state, create_user, test_security_config};
use support::{assert_problem_details, create_test_app};

#[actix_web::test]
async fn test_get_portfolio_before_any_exists_is_404() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::get().uri("/api/portfolio").to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details(resp, 404, "PORTFOLIO_NOT_FOUND", "Portfolio not found").await;

    Ok(())
}

#[actix_web::test]
async fn test_put_creates_then_updates_in_place() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let user = create_user(&state, "owner@example.com", "hunter2hunter2").await?;
    let sec = test_security_config();
    let app = create_test_app(state).with_prod_routes().build().await?;

    let token = mint_test_token(&user.id.to_string(), "owner@example.com", &sec);

    let req = test::TestRequest::put()
        .uri("/api/portfolio")
        .cookie(token_cookie(&token))
        .set_json(json!({
            "title": "Jane Doe",
            "position": "Software Engineer",
            "description": "Things I build"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);
    let created: serde_json::Value = test::read_body_json(resp).await;
    let portfolio_id = created["id"].as_str().expect("id should be a string").to_string();
    assert_eq!(created["title"], "Jane Doe");

    // Second PUT updates the same row.
    let req = test::TestRequest::put()
        .uri("/api/portfolio")
        .cookie(token_cookie(&token))
        .set_json(json!({
            "title": "Jane Doe",
            "position": "Staff Engineer",
            "description": "Things I build"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);
    let updated: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(updated["id"], portfolio_id.as_str());
    assert_eq!(updated["position"], "Staff Engineer");

    Ok(())
}

#[actix_web::test]
async fn test_public_read_inlines_projects_and_skills() -> Result<(), Box<dyn std::error::Error>>
{
    let state = build_test_state().await?;
    let user = create_user(&state, "owner@example.com", "hunter2hunter2").await?;
    let sec = test_security_config();
    let app = create_test_app(state).with_prod_routes().build().await?;

    let token = mint_test_token(&user.id.to_string(), "owner@example.com", &sec);

    let req = test::TestRequest::put()
        .uri("/api/portfolio")
        .cookie(token_cookie(&token))
        .set_json(json!({ "title": "Jane Doe", "position": "Engineer", "description": "" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);

    let req = test::TestRequest::post()
        .uri("/api/projects")
        .cookie(token_cookie(&token))
        .set_json(json!({
            "title": "Backend",
            "description": "The API",
            "technologies": ["rust", "actix-web"]
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 201);

    let req = test::TestRequest::post()
        .uri("/api/skills")
        .cookie(token_cookie(&token))
        .set_json(json!({ "category": "Languages", "items": ["Rust", "SQL"] }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 201);

    // Anonymous read sees the aggregate.
    let req = test::TestRequest::get().uri("/api/portfolio").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["title"], "Jane Doe");
    assert_eq!(body["projects"].as_array().map(Vec::len), Some(1));
    assert_eq!(body["projects"][0]["technologies"], json!(["rust", "actix-web"]));
    assert_eq!(body["skills"].as_array().map(Vec::len), Some(1));
    assert_eq!(body["skills"][0]["category"], "Languages");

    Ok(())
}

#[actix_web::test]
async fn test_put_requires_title_and_position() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let user = create_user(&state, "owner@example.com", "hunter2hunter2").await?;
    let sec = test_security_config();
    let app = create_test_app(state).with_prod_routes().build().await?;

    let token = mint_test_token(&user.id.to_string(), "owner@example.com", &sec);
    let req = test::TestRequest::put()
        .uri("/api/portfolio")
        .cookie(token_cookie(&token))
        .set_json(json!({ "title": "", "position": "", "description": "d" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details(resp, 400, "MISSING_FIELD", "Title and position are required").await;

    Ok(())
}
