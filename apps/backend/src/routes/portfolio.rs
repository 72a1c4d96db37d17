//! Portfolio read (public) and upsert (admin).

use actix_web::{get, put, web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::entities::{portfolios, projects, skills};
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::extractors::auth_user::AuthUser;
use crate::extractors::validated_json::ValidatedJson;
use crate::repos;
use crate::state::app_state::AppState;

/// Aggregate response for the public read: the portfolio row with its
/// projects and skill categories inlined.
#[derive(Debug, Serialize)]
pub struct PortfolioView {
    #[serde(flatten)]
    pub portfolio: portfolios::Model,
    pub projects: Vec<projects::Model>,
    pub skills: Vec<skills::Model>,
}

#[derive(Debug, Deserialize)]
pub struct PortfolioBody {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub description: String,
}

/// Public: exempted from the gate for GET only. Writes on the same path go
/// through authentication like any other admin route.
#[get("/portfolio")]
pub async fn get_portfolio(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let portfolio = repos::portfolios::find_default(&state.db)
        .await?
        .ok_or_else(|| {
            AppError::not_found(ErrorCode::PortfolioNotFound, "Portfolio not found")
        })?;

    let projects = repos::projects::list_by_portfolio(&state.db, portfolio.id).await?;
    let skills = repos::skills::list_by_portfolio(&state.db, portfolio.id).await?;

    Ok(HttpResponse::Ok().json(PortfolioView {
        portfolio,
        projects,
        skills,
    }))
}

#[put("/portfolio")]
pub async fn put_portfolio(
    state: web::Data<AppState>,
    user: AuthUser,
    body: ValidatedJson<PortfolioBody>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();
    if body.title.is_empty() || body.position.is_empty() {
        return Err(AppError::validation(
            ErrorCode::MissingField,
            "Title and position are required",
        ));
    }

    let portfolio = repos::portfolios::upsert(
        &state.db,
        user.user_id,
        repos::portfolios::PortfolioInput {
            title: body.title,
            position: body.position,
            description: body.description,
        },
    )
    .await?;

    Ok(HttpResponse::Ok().json(portfolio))
}
