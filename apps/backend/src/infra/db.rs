//! Database bootstrap: connect and migrate in one place.

use std::time::Duration;

use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use crate::config::db::{db_url, DbProfile};
use crate::error::AppError;

/// Connect to the database for the given profile.
pub async fn connect_db(profile: &DbProfile) -> Result<DatabaseConnection, AppError> {
    let url = db_url(profile)?;

    let mut opts = ConnectOptions::new(url);
    match profile {
        DbProfile::Prod => {
            opts.max_connections(10)
                .connect_timeout(Duration::from_secs(5))
                .sqlx_logging(false);
        }
        DbProfile::Test => {
            // A pooled in-memory SQLite database lives and dies with its
            // connection; pin the pool to a single one.
            opts.max_connections(1).min_connections(1).sqlx_logging(false);
        }
    }

    Database::connect(opts)
        .await
        .map_err(|e| AppError::db(format!("failed to connect to database: {e}")))
}

/// Single entrypoint used by `main` and tests: connect, then apply all
/// pending migrations.
pub async fn bootstrap_db(profile: &DbProfile) -> Result<DatabaseConnection, AppError> {
    let conn = connect_db(profile).await?;

    Migrator::up(&conn, None)
        .await
        .map_err(|e| AppError::db(format!("failed to run migrations: {e}")))?;

    info!(profile = ?profile, "database connected and migrated");
    Ok(conn)
}
