//! Skill-category CRUD, same ownership rules as projects.

use actix_web::{delete, get, post, put, web, HttpResponse};
use sea_orm::ConnectionTrait;
use serde::Deserialize;
use uuid::Uuid;

use crate::entities::{portfolios, skills};
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::extractors::auth_user::AuthUser;
use crate::extractors::validated_json::ValidatedJson;
use crate::repos;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct SkillBody {
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub items: Vec<String>,
}

impl SkillBody {
    fn validate(&self) -> Result<(), AppError> {
        if self.category.is_empty() {
            return Err(AppError::validation(
                ErrorCode::MissingField,
                "Category is required",
            ));
        }
        Ok(())
    }

    fn into_input(self) -> repos::skills::SkillInput {
        repos::skills::SkillInput {
            category: self.category,
            items: self.items,
        }
    }
}

async fn caller_portfolio<C: ConnectionTrait>(
    conn: &C,
    user: &AuthUser,
) -> Result<portfolios::Model, AppError> {
    repos::portfolios::find_by_user_id(conn, user.user_id)
        .await?
        .ok_or_else(|| AppError::not_found(ErrorCode::PortfolioNotFound, "Portfolio not found"))
}

async fn owned_skill<C: ConnectionTrait>(
    conn: &C,
    portfolio: &portfolios::Model,
    id: Uuid,
) -> Result<skills::Model, AppError> {
    let skill = repos::skills::find_by_id(conn, id)
        .await?
        .filter(|s| s.portfolio_id == portfolio.id);
    skill.ok_or_else(|| AppError::not_found(ErrorCode::SkillNotFound, "Skill not found"))
}

#[get("/skills")]
pub async fn list_skills(
    state: web::Data<AppState>,
    user: AuthUser,
) -> Result<HttpResponse, AppError> {
    let portfolio = caller_portfolio(&state.db, &user).await?;
    let skills = repos::skills::list_by_portfolio(&state.db, portfolio.id).await?;
    Ok(HttpResponse::Ok().json(skills))
}

#[post("/skills")]
pub async fn create_skill(
    state: web::Data<AppState>,
    user: AuthUser,
    body: ValidatedJson<SkillBody>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();
    body.validate()?;

    let portfolio = caller_portfolio(&state.db, &user).await?;
    let skill = repos::skills::create(&state.db, portfolio.id, body.into_input()).await?;
    Ok(HttpResponse::Created().json(skill))
}

#[put("/skills/{id}")]
pub async fn update_skill(
    state: web::Data<AppState>,
    user: AuthUser,
    path: web::Path<Uuid>,
    body: ValidatedJson<SkillBody>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();
    body.validate()?;

    let portfolio = caller_portfolio(&state.db, &user).await?;
    let skill = owned_skill(&state.db, &portfolio, path.into_inner()).await?;
    let updated = repos::skills::update(&state.db, skill, body.into_input()).await?;
    Ok(HttpResponse::Ok().json(updated))
}

#[delete("/skills/{id}")]
pub async fn delete_skill(
    state: web::Data<AppState>,
    user: AuthUser,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let portfolio = caller_portfolio(&state.db, &user).await?;
    let skill = owned_skill(&state.db, &portfolio, path.into_inner()).await?;
    repos::skills::delete(&state.db, skill.id).await?;
    Ok(HttpResponse::NoContent().finish())
}
