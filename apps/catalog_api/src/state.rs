// apps/catalog_api/src/state.rs
use crate::config::AppConfig;
use crate::db;
use crate::errors::Result as AppResult;
use catalog::{CatalogService, InMemoryProductRepository, ProductRepository};
use std::sync::Arc;

#[derive(Clone, Debug)]
pub struct AppState {
  pub catalog: CatalogService,
  pub config: Arc<AppConfig>, // Share loaded config
}

impl AppState {
  /// Picks the repository from the configuration: Postgres when a database is
  /// configured, otherwise an in-memory store that lives as long as the process.
  pub async fn initialize(config: AppConfig) -> AppResult<Self> {
    let repository: Arc<dyn ProductRepository> = match &config.database {
      Some(database) => {
        let pool = db::connect(database).await?;
        Arc::new(db::PgProductRepository::new(pool))
      }
      None => {
        tracing::warn!("DATABASE_URL is not set; products are kept in memory and lost on restart.");
        Arc::new(InMemoryProductRepository::new())
      }
    };
    Ok(Self::with_repository(config, repository))
  }

  pub fn with_repository(config: AppConfig, repository: Arc<dyn ProductRepository>) -> Self {
    let catalog = CatalogService::new(repository);
    tracing::info!(backend = catalog.backend_name(), "Catalog store ready.");
    Self {
      catalog,
      config: Arc::new(config),
    }
  }
}
