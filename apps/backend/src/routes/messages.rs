//! Contact-message inbox.

use actix_web::{get, post, web, HttpResponse};
use serde::Deserialize;

use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::extractors::auth_user::AuthUser;
use crate::extractors::validated_json::ValidatedJson;
use crate::repos;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct MessageBody {
    #[serde(default)]
    pub sender_email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub content: String,
}

#[get("/messages")]
pub async fn list_messages(
    state: web::Data<AppState>,
    user: AuthUser,
) -> Result<HttpResponse, AppError> {
    let messages = repos::messages::list_by_user(&state.db, user.user_id).await?;
    Ok(HttpResponse::Ok().json(messages))
}

#[post("/messages")]
pub async fn create_message(
    state: web::Data<AppState>,
    user: AuthUser,
    body: ValidatedJson<MessageBody>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();
    if body.sender_email.is_empty() || body.subject.is_empty() || body.content.is_empty() {
        return Err(AppError::validation(
            ErrorCode::MissingField,
            "Sender email, subject and content are required",
        ));
    }

    let message = repos::messages::create(
        &state.db,
        user.user_id,
        &body.sender_email,
        &body.subject,
        &body.content,
    )
    .await?;

    Ok(HttpResponse::Created().json(message))
}
