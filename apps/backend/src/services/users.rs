//! Boot-time provisioning of the site owner's account.

use sea_orm::ConnectionTrait;
use tracing::info;

use crate::auth::password::hash_password;
use crate::error::AppError;
use crate::logging::pii::Redacted;
use crate::repos::users;

/// Create the admin user if no account with this email exists yet.
///
/// The site is single-tenant and has no registration endpoint, so the one
/// account is seeded from configuration at startup. Idempotent: re-running
/// with the same email leaves the existing row (and its password) untouched.
pub async fn ensure_admin_user<C: ConnectionTrait>(
    conn: &C,
    email: &str,
    password: &str,
) -> Result<(), AppError> {
    if users::find_by_email(conn, email).await?.is_some() {
        return Ok(());
    }

    let hash = hash_password(password)?;
    let user = users::create(conn, email, &hash).await?;
    info!(user_id = %user.id, email = %Redacted(email), "admin user provisioned");
    Ok(())
}
