//! Login orchestration: credential check plus token minting.

use std::time::SystemTime;

use sea_orm::ConnectionTrait;
use tracing::info;

use crate::auth::jwt::mint_access_token;
use crate::auth::password::verify_password;
use crate::error::AppError;
use crate::logging::pii::Redacted;
use crate::repos::users;
use crate::state::security_config::SecurityConfig;

/// Check the credentials and mint an access token for the user.
///
/// An unknown email and a wrong password both return the same
/// `InvalidCredentials` error, so the response does not reveal whether the
/// account exists. The bcrypt comparison only runs when the user is found;
/// the lookup itself is not observable through the response body.
pub async fn authenticate<C: ConnectionTrait>(
    conn: &C,
    email: &str,
    password: &str,
    security: &SecurityConfig,
) -> Result<String, AppError> {
    let user = users::find_by_email(conn, email)
        .await?
        .ok_or_else(AppError::invalid_credentials)?;

    if !verify_password(password, &user.password_hash)? {
        return Err(AppError::invalid_credentials());
    }

    let token = mint_access_token(
        &user.id.to_string(),
        &user.email,
        SystemTime::now(),
        security,
    )?;

    info!(email = %Redacted(&user.email), "login succeeded");
    Ok(token)
}
