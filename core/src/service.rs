// catalog/src/service.rs

//! The catalog service: list, get, create, update and delete over products.
//!
//! Every operation is a single repository call after validation. There is no
//! caching and no locking here; the repository is the only shared state and
//! concurrent writes to the same product are last-writer-wins.

use std::sync::Arc;

use tracing::{error, info, instrument, warn};
use uuid::Uuid;

use crate::error::{CatalogError, CatalogResult, StoreError};
use crate::input::{CreateProductRequest, UpdateProductRequest};
use crate::model::{Product, ProductFilter};
use crate::repository::ProductRepository;
use crate::seed;

#[derive(Clone)]
pub struct CatalogService {
  repository: Arc<dyn ProductRepository>,
}

impl std::fmt::Debug for CatalogService {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("CatalogService")
      .field("backend", &self.repository.backend_name())
      .finish()
  }
}

/// Logs a repository failure at the level its HTTP class deserves and converts it.
fn store_failure(operation: &'static str, id: Option<Uuid>, err: StoreError) -> CatalogError {
  match &err {
    StoreError::NotFound(what) => warn!(operation, product_id = ?id, "{} not found", what),
    StoreError::Unexpected(cause) => error!(operation, product_id = ?id, error = ?cause, "Store operation failed"),
  }
  err.into()
}

impl CatalogService {
  pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
    Self { repository }
  }

  pub fn backend_name(&self) -> &'static str {
    self.repository.backend_name()
  }

  #[instrument(name = "service::list_products", skip(self), fields(app_type = ?filter.app_type))]
  pub async fn list(&self, filter: ProductFilter) -> CatalogResult<Vec<Product>> {
    let products = self
      .repository
      .list(filter)
      .await
      .map_err(|e| store_failure("list", None, e))?;
    info!("Fetched {} products.", products.len());
    Ok(products)
  }

  #[instrument(name = "service::get_product", skip(self), fields(product_id = %id))]
  pub async fn get(&self, id: Uuid) -> CatalogResult<Product> {
    self.repository.get(id).await.map_err(|e| store_failure("get", Some(id), e))
  }

  #[instrument(name = "service::create_product", skip(self, request))]
  pub async fn create(&self, request: CreateProductRequest) -> CatalogResult<Product> {
    let new_product = request.validate().inspect_err(|e| warn!(error = %e, "Rejected product creation"))?;
    let product = self
      .repository
      .insert(new_product)
      .await
      .map_err(|e| store_failure("create", None, e))?;
    info!(product_id = %product.id, app_type = ?product.app_type, "Product created.");
    Ok(product)
  }

  #[instrument(name = "service::update_product", skip(self, request), fields(product_id = %id))]
  pub async fn update(&self, id: Uuid, request: UpdateProductRequest) -> CatalogResult<Product> {
    let patch = request.validate().inspect_err(|e| warn!(error = %e, "Rejected product update"))?;
    let product = self
      .repository
      .update(id, patch)
      .await
      .map_err(|e| store_failure("update", Some(id), e))?;
    info!("Product updated.");
    Ok(product)
  }

  #[instrument(name = "service::delete_product", skip(self), fields(product_id = %id))]
  pub async fn delete(&self, id: Uuid) -> CatalogResult<()> {
    self
      .repository
      .delete(id)
      .await
      .map_err(|e| store_failure("delete", Some(id), e))?;
    info!("Product deleted.");
    Ok(())
  }

  /// Replaces the whole catalog with the demo products.
  #[instrument(name = "service::reseed", skip(self))]
  pub async fn reseed(&self) -> CatalogResult<usize> {
    let removed = self
      .repository
      .clear()
      .await
      .map_err(|e| store_failure("reseed", None, e))?;
    info!(removed, "Cleared existing products.");

    let mut inserted = 0;
    for product in seed::demo_catalog() {
      self
        .repository
        .insert(product)
        .await
        .map_err(|e| store_failure("reseed", None, e))?;
      inserted += 1;
    }
    info!(inserted, "Seeding completed.");
    Ok(inserted)
  }

  pub async fn health_check(&self) -> CatalogResult<()> {
    self
      .repository
      .health_check()
      .await
      .map_err(|e| store_failure("health_check", None, e))
  }
}
