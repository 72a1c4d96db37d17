//! HTTP route wiring.
//!
//! Everything under `/api` sits behind the auth gate; the gate itself
//! decides which method/path pairs are exempt. Keeping the gate here (rather
//! than in `main`) means integration tests exercise the exact production
//! route tree.

pub mod auth;
pub mod health;
pub mod messages;
pub mod portfolio;
pub mod projects;
pub mod skills;

use actix_web::web;

use crate::middleware::auth_gate::AuthGate;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health::health).service(
        web::scope("/api")
            .wrap(AuthGate)
            .service(web::scope("/auth").service(auth::login))
            .service(portfolio::get_portfolio)
            .service(portfolio::put_portfolio)
            .service(projects::list_projects)
            .service(projects::create_project)
            .service(projects::update_project)
            .service(projects::delete_project)
            .service(skills::list_skills)
            .service(skills::create_skill)
            .service(skills::update_skill)
            .service(skills::delete_skill)
            .service(messages::list_messages)
            .service(messages::create_message),
    );
}
