// apps/catalog_api/src/bin/catalog_seed.rs

//! Replaces the contents of the `products` table with the demo catalog.

use catalog_api::config::AppConfig;
use catalog_api::state::AppState;
use catalog_api::telemetry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  dotenvy::dotenv().ok();
  telemetry::init_tracing();

  let config = AppConfig::from_env()?;
  if config.database.is_none() {
    anyhow::bail!("DATABASE_URL must be set to seed the catalog");
  }

  tracing::info!("Seeding products...");
  let state = AppState::initialize(config).await?;
  let inserted = state.catalog.reseed().await.inspect_err(|e| {
    tracing::error!(error = %e, "Error seeding database.");
  })?;
  tracing::info!(inserted, "Seeding completed!");
  Ok(())
}
