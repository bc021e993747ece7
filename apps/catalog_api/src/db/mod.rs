// apps/catalog_api/src/db/mod.rs

//! PostgreSQL wiring: pool construction, migrations and the product repository.

pub mod products;

pub use products::PgProductRepository;

use crate::config::DatabaseConfig;
use crate::errors::Result as AppResult;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;

/// Opens the pool and brings the schema up to date before any request is served.
pub async fn connect(database: &DatabaseConfig) -> AppResult<PgPool> {
  // Avoid logging `database.url`; it may contain credentials.
  let pool = PgPoolOptions::new()
    .max_connections(database.max_connections)
    .acquire_timeout(Duration::from_millis(database.acquire_timeout_ms))
    .connect(&database.url)
    .await?;
  tracing::info!(max_connections = database.max_connections, "Connected to the database.");

  sqlx::migrate!("./migrations").run(&pool).await?;
  tracing::info!("Database migrations applied.");

  Ok(pool)
}
