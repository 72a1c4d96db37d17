use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use crate::entities::messages;
use crate::error::AppError;

/// Newest first, matching how the admin panel displays the inbox.
pub async fn list_by_user<C: ConnectionTrait>(
    conn: &C,
    user_id: Uuid,
) -> Result<Vec<messages::Model>, AppError> {
    let messages = messages::Entity::find()
        .filter(messages::Column::UserId.eq(user_id))
        .order_by_desc(messages::Column::CreatedAt)
        .all(conn)
        .await?;
    Ok(messages)
}

pub async fn create<C: ConnectionTrait>(
    conn: &C,
    user_id: Uuid,
    sender_email: &str,
    subject: &str,
    content: &str,
) -> Result<messages::Model, AppError> {
    let active = messages::ActiveModel {
        id: Set(Uuid::new_v4()),
        user_id: Set(user_id),
        sender_email: Set(sender_email.to_string()),
        subject: Set(subject.to_string()),
        content: Set(content.to_string()),
        created_at: Set(super::now()),
    };
    Ok(active.insert(conn).await?)
}
