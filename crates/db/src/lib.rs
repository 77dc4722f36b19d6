//! Database layer: connection pool, embedded migrations, models, and
//! repositories for the holocron catalog.

use sqlx::postgres::PgPoolOptions;

pub mod models;
pub mod repositories;

/// Convenience alias used throughout the workspace.
pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a Postgres connection string.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await
}

/// Verify the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply embedded migrations. Safe to run on every startup; already-applied
/// versions are skipped.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
