use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use crate::entities::skills;
use crate::error::AppError;

#[derive(Debug, Clone)]
pub struct SkillInput {
    pub category: String,
    pub items: Vec<String>,
}

pub async fn list_by_portfolio<C: ConnectionTrait>(
    conn: &C,
    portfolio_id: Uuid,
) -> Result<Vec<skills::Model>, AppError> {
    let skills = skills::Entity::find()
        .filter(skills::Column::PortfolioId.eq(portfolio_id))
        .order_by_asc(skills::Column::CreatedAt)
        .all(conn)
        .await?;
    Ok(skills)
}

pub async fn find_by_id<C: ConnectionTrait>(
    conn: &C,
    id: Uuid,
) -> Result<Option<skills::Model>, AppError> {
    let skill = skills::Entity::find_by_id(id).one(conn).await?;
    Ok(skill)
}

pub async fn create<C: ConnectionTrait>(
    conn: &C,
    portfolio_id: Uuid,
    input: SkillInput,
) -> Result<skills::Model, AppError> {
    let now = super::now();
    let active = skills::ActiveModel {
        id: Set(Uuid::new_v4()),
        portfolio_id: Set(portfolio_id),
        category: Set(input.category),
        items: Set(input.items.into()),
        created_at: Set(now),
        updated_at: Set(now),
    };
    Ok(active.insert(conn).await?)
}

pub async fn update<C: ConnectionTrait>(
    conn: &C,
    skill: skills::Model,
    input: SkillInput,
) -> Result<skills::Model, AppError> {
    let mut active: skills::ActiveModel = skill.into();
    active.category = Set(input.category);
    active.items = Set(input.items.into());
    active.updated_at = Set(super::now());
    Ok(active.update(conn).await?)
}

pub async fn delete<C: ConnectionTrait>(conn: &C, id: Uuid) -> Result<(), AppError> {
    skills::Entity::delete_by_id(id).exec(conn).await?;
    Ok(())
}
