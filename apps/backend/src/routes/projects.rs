//! Project CRUD, scoped to the caller's portfolio.

use actix_web::{delete, get, post, put, web, HttpResponse};
use sea_orm::ConnectionTrait;
use serde::Deserialize;
use uuid::Uuid;

use crate::entities::{portfolios, projects};
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::extractors::auth_user::AuthUser;
use crate::extractors::validated_json::ValidatedJson;
use crate::repos;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct ProjectBody {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub image_url: Option<String>,
    pub github_url: Option<String>,
    pub demo_url: Option<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
}

impl ProjectBody {
    fn validate(&self) -> Result<(), AppError> {
        if self.title.is_empty() || self.description.is_empty() {
            return Err(AppError::validation(
                ErrorCode::MissingField,
                "Title and description are required",
            ));
        }
        Ok(())
    }

    fn into_input(self) -> repos::projects::ProjectInput {
        repos::projects::ProjectInput {
            title: self.title,
            description: self.description,
            image_url: self.image_url,
            github_url: self.github_url,
            demo_url: self.demo_url,
            technologies: self.technologies,
        }
    }
}

/// The caller's portfolio. Project routes require it to exist; creating
/// projects before the portfolio is a 404 rather than an orphaned row.
async fn caller_portfolio<C: ConnectionTrait>(
    conn: &C,
    user: &AuthUser,
) -> Result<portfolios::Model, AppError> {
    repos::portfolios::find_by_user_id(conn, user.user_id)
        .await?
        .ok_or_else(|| AppError::not_found(ErrorCode::PortfolioNotFound, "Portfolio not found"))
}

/// Look up a project and check it belongs to the caller's portfolio.
/// A foreign project id answers identically to a nonexistent one.
async fn owned_project<C: ConnectionTrait>(
    conn: &C,
    portfolio: &portfolios::Model,
    id: Uuid,
) -> Result<projects::Model, AppError> {
    let project = repos::projects::find_by_id(conn, id)
        .await?
        .filter(|p| p.portfolio_id == portfolio.id);
    project.ok_or_else(|| AppError::not_found(ErrorCode::ProjectNotFound, "Project not found"))
}

#[get("/projects")]
pub async fn list_projects(
    state: web::Data<AppState>,
    user: AuthUser,
) -> Result<HttpResponse, AppError> {
    let portfolio = caller_portfolio(&state.db, &user).await?;
    let projects = repos::projects::list_by_portfolio(&state.db, portfolio.id).await?;
    Ok(HttpResponse::Ok().json(projects))
}

#[post("/projects")]
pub async fn create_project(
    state: web::Data<AppState>,
    user: AuthUser,
    body: ValidatedJson<ProjectBody>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();
    body.validate()?;

    let portfolio = caller_portfolio(&state.db, &user).await?;
    let project = repos::projects::create(&state.db, portfolio.id, body.into_input()).await?;
    Ok(HttpResponse::Created().json(project))
}

#[put("/projects/{id}")]
pub async fn update_project(
    state: web::Data<AppState>,
    user: AuthUser,
    path: web::Path<Uuid>,
    body: ValidatedJson<ProjectBody>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();
    body.validate()?;

    let portfolio = caller_portfolio(&state.db, &user).await?;
    let project = owned_project(&state.db, &portfolio, path.into_inner()).await?;
    let updated = repos::projects::update(&state.db, project, body.into_input()).await?;
    Ok(HttpResponse::Ok().json(updated))
}

#[delete("/projects/{id}")]
pub async fn delete_project(
    state: web::Data<AppState>,
    user: AuthUser,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let portfolio = caller_portfolio(&state.db, &user).await?;
    let project = owned_project(&state.db, &portfolio, path.into_inner()).await?;
    repos::projects::delete(&state.db, project.id).await?;
    Ok(HttpResponse::NoContent().finish())
}
