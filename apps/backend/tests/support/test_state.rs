//! Test state helpers: in-memory database, fixed test secret, seeded users.

use folio_backend::auth::password::hash_password;
use folio_backend::config::db::DbProfile;
use folio_backend::entities::users;
use folio_backend::infra::state::build_state;
use folio_backend::repos;
use folio_backend::state::app_state::AppState;
use folio_backend::state::security_config::SecurityConfig;
use folio_backend::AppError;

pub const TEST_JWT_SECRET: &[u8] = b"test_secret_key_for_testing_purposes_only";

pub fn test_security_config() -> SecurityConfig {
    SecurityConfig::new(TEST_JWT_SECRET)
}

/// Fresh AppState over an in-memory database with migrations applied.
pub async fn build_test_state() -> Result<AppState, AppError> {
    build_state()
        .with_db(DbProfile::Test)
        .with_security(test_security_config())
        .build()
        .await
}

/// Seed a user with a bcrypt-hashed password and return the row.
pub async fn create_user(
    state: &AppState,
    email: &str,
    password: &str,
) -> Result<users::Model, AppError> {
    let hash = hash_password(password)?;
    repos::users::create(&state.db, email, &hash).await
}
