//! Postgres persistence for users and staff records.

pub mod models;
pub mod repositories;

use sqlx::migrate::MigrateDatabase;
use sqlx::postgres::PgPoolOptions;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply all pending migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}

/// Create the target database if it does not exist yet.
///
/// Returns `true` when a database was created. Intended for local development;
/// production databases are provisioned ahead of time.
pub async fn ensure_database(database_url: &str) -> Result<bool, sqlx::Error> {
    if sqlx::Postgres::database_exists(database_url).await? {
        tracing::info!("Database already exists, skipping creation");
        return Ok(false);
    }

    sqlx::Postgres::create_database(database_url).await?;
    tracing::info!("Database created");
    Ok(true)
}

/// Names of all tables in the `public` schema, sorted alphabetically.
pub async fn list_tables(pool: &DbPool) -> Result<Vec<String>, sqlx::Error> {
    sqlx::query_scalar(
        "SELECT table_name::TEXT FROM information_schema.tables
         WHERE table_schema = 'public'
         ORDER BY table_name",
    )
    .fetch_all(pool)
    .await
}
