use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use crate::entities::portfolios;
use crate::error::AppError;

/// Portfolio metadata fields supplied by the admin panel.
#[derive(Debug, Clone)]
pub struct PortfolioInput {
    pub title: String,
    pub position: String,
    pub description: String,
}

pub async fn find_by_user_id<C: ConnectionTrait>(
    conn: &C,
    user_id: Uuid,
) -> Result<Option<portfolios::Model>, AppError> {
    let portfolio = portfolios::Entity::find()
        .filter(portfolios::Column::UserId.eq(user_id))
        .one(conn)
        .await?;
    Ok(portfolio)
}

/// The site is single-tenant; the public read serves the oldest (in
/// practice, only) portfolio.
pub async fn find_default<C: ConnectionTrait>(
    conn: &C,
) -> Result<Option<portfolios::Model>, AppError> {
    let portfolio = portfolios::Entity::find()
        .order_by_asc(portfolios::Column::CreatedAt)
        .one(conn)
        .await?;
    Ok(portfolio)
}

/// Create the caller's portfolio or update it in place if it already exists.
pub async fn upsert<C: ConnectionTrait>(
    conn: &C,
    user_id: Uuid,
    input: PortfolioInput,
) -> Result<portfolios::Model, AppError> {
    let now = super::now();

    match find_by_user_id(conn, user_id).await? {
        Some(existing) => {
            let mut active: portfolios::ActiveModel = existing.into();
            active.title = Set(input.title);
            active.position = Set(input.position);
            active.description = Set(input.description);
            active.updated_at = Set(now);
            Ok(active.update(conn).await?)
        }
        None => {
            let active = portfolios::ActiveModel {
                id: Set(Uuid::new_v4()),
                user_id: Set(user_id),
                title: Set(input.title),
                position: Set(input.position),
                description: Set(input.description),
                created_at: Set(now),
                updated_at: Set(now),
            };
            Ok(active.insert(conn).await?)
        }
    }
}
