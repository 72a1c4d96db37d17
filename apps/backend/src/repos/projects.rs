use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use crate::entities::projects;
use crate::error::AppError;

#[derive(Debug, Clone)]
pub struct ProjectInput {
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
    pub github_url: Option<String>,
    pub demo_url: Option<String>,
    pub technologies: Vec<String>,
}

pub async fn list_by_portfolio<C: ConnectionTrait>(
    conn: &C,
    portfolio_id: Uuid,
) -> Result<Vec<projects::Model>, AppError> {
    let projects = projects::Entity::find()
        .filter(projects::Column::PortfolioId.eq(portfolio_id))
        .order_by_asc(projects::Column::CreatedAt)
        .all(conn)
        .await?;
    Ok(projects)
}

pub async fn find_by_id<C: ConnectionTrait>(
    conn: &C,
    id: Uuid,
) -> Result<Option<projects::Model>, AppError> {
    let project = projects::Entity::find_by_id(id).one(conn).await?;
    Ok(project)
}

pub async fn create<C: ConnectionTrait>(
    conn: &C,
    portfolio_id: Uuid,
    input: ProjectInput,
) -> Result<projects::Model, AppError> {
    let now = super::now();
    let active = projects::ActiveModel {
        id: Set(Uuid::new_v4()),
        portfolio_id: Set(portfolio_id),
        title: Set(input.title),
        description: Set(input.description),
        image_url: Set(input.image_url),
        github_url: Set(input.github_url),
        demo_url: Set(input.demo_url),
        technologies: Set(input.technologies.into()),
        created_at: Set(now),
        updated_at: Set(now),
    };
    Ok(active.insert(conn).await?)
}

pub async fn update<C: ConnectionTrait>(
    conn: &C,
    project: projects::Model,
    input: ProjectInput,
) -> Result<projects::Model, AppError> {
    let mut active: projects::ActiveModel = project.into();
    active.title = Set(input.title);
    active.description = Set(input.description);
    active.image_url = Set(input.image_url);
    active.github_url = Set(input.github_url);
    active.demo_url = Set(input.demo_url);
    active.technologies = Set(input.technologies.into());
    active.updated_at = Set(super::now());
    Ok(active.update(conn).await?)
}

pub async fn delete<C: ConnectionTrait>(conn: &C, id: Uuid) -> Result<(), AppError> {
    projects::Entity::delete_by_id(id).exec(conn).await?;
    Ok(())
}
