//! Embedded migration runner.

use sqlx::PgPool;
use tracing::info;

use recruitflow_core::error::{AppError, ErrorKind};

/// Apply any migrations not yet recorded in the database.
pub async fn run_migrations(pool: &PgPool) -> Result<(), AppError> {
    info!("Applying database migrations");

    sqlx::migrate!("../../migrations")
        .run(pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Migration failed", e))?;

    info!("Database schema is up to date");
    Ok(())
}
