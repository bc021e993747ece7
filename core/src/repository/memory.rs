// catalog/src/repository/memory.rs

//! In-memory product repository.
//!
//! Not durable: all rows are lost when the process exits. Used by tests and by
//! the API server when no database is configured.

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use tracing::debug;
use uuid::Uuid;

use super::ProductRepository;
use crate::error::{StoreError, StoreResult};
use crate::model::{NewProduct, Product, ProductFilter, ProductPatch};

/// Rows are kept in insertion order so that products created within the same
/// clock tick still list newest-first.
#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
  rows: RwLock<Vec<Product>>,
}

impl InMemoryProductRepository {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn len(&self) -> usize {
    self.rows.read().len()
  }

  pub fn is_empty(&self) -> bool {
    self.rows.read().is_empty()
  }
}

fn not_found(id: Uuid) -> StoreError {
  StoreError::NotFound(format!("product {}", id))
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
  async fn list(&self, filter: ProductFilter) -> StoreResult<Vec<Product>> {
    let rows = self.rows.read();
    let mut products: Vec<Product> = rows.iter().rev().filter(|p| filter.matches(p)).cloned().collect();
    // Stable sort: equal timestamps keep the reversed insertion order.
    products.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    Ok(products)
  }

  async fn get(&self, id: Uuid) -> StoreResult<Product> {
    self
      .rows
      .read()
      .iter()
      .find(|p| p.id == id)
      .cloned()
      .ok_or_else(|| not_found(id))
  }

  async fn insert(&self, product: NewProduct) -> StoreResult<Product> {
    let mut rows = self.rows.write();
    let mut id = Uuid::new_v4();
    while rows.iter().any(|p| p.id == id) {
      id = Uuid::new_v4();
    }
    let product = product.into_product(id, Utc::now());
    rows.push(product.clone());
    debug!(product_id = %id, rows = rows.len(), "inserted product");
    Ok(product)
  }

  async fn update(&self, id: Uuid, patch: ProductPatch) -> StoreResult<Product> {
    let mut rows = self.rows.write();
    let row = rows.iter_mut().find(|p| p.id == id).ok_or_else(|| not_found(id))?;
    patch.apply(row, Utc::now());
    Ok(row.clone())
  }

  async fn delete(&self, id: Uuid) -> StoreResult<()> {
    let mut rows = self.rows.write();
    let index = rows.iter().position(|p| p.id == id).ok_or_else(|| not_found(id))?;
    rows.remove(index);
    Ok(())
  }

  async fn clear(&self) -> StoreResult<u64> {
    let mut rows = self.rows.write();
    let removed = rows.len() as u64;
    rows.clear();
    Ok(removed)
  }

  async fn health_check(&self) -> StoreResult<()> {
    Ok(())
  }

  fn backend_name(&self) -> &'static str {
    "memory"
  }
}
