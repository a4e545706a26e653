//! Postgres access for the invoice dashboard.
//!
//! Pool construction, migrations, and the model/repository layers. The
//! connection string comes from the `DATABASE_URL` environment variable
//! (read by the binary, passed in here) and connections require TLS.

use std::str::FromStr;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};

pub mod models;
pub mod repositories;

pub type DbPool = sqlx::PgPool;

/// Embedded migrations from `db/migrations` at the workspace root.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("../../db/migrations");

/// Create a connection pool from a database URL. Encrypted transport is
/// required regardless of what the URL's own parameters say.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    let options = PgConnectOptions::from_str(database_url)?.ssl_mode(PgSslMode::Require);
    PgPoolOptions::new()
        .max_connections(20)
        .connect_with(options)
        .await
}

/// Cheap liveness probe used at startup and by the health endpoint.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await.map(|_| ())
}

/// Apply any pending migrations.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    MIGRATOR.run(pool).await
}
