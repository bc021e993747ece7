// catalog/src/repository/mod.rs

//! Storage seam for the catalog.
//!
//! The service never talks to a database directly; it is handed an
//! `Arc<dyn ProductRepository>` at construction. Implementations own id
//! generation and timestamps.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::StoreResult;
use crate::model::{NewProduct, Product, ProductFilter, ProductPatch};

pub mod memory;

pub use memory::InMemoryProductRepository;

#[async_trait]
pub trait ProductRepository: Send + Sync {
  /// Products matching `filter`, newest `created_at` first.
  async fn list(&self, filter: ProductFilter) -> StoreResult<Vec<Product>>;

  /// `StoreError::NotFound` when no row has this id.
  async fn get(&self, id: Uuid) -> StoreResult<Product>;

  async fn insert(&self, product: NewProduct) -> StoreResult<Product>;

  /// Applies `patch` and refreshes `updated_at`. `StoreError::NotFound` when no row has this id.
  async fn update(&self, id: Uuid, patch: ProductPatch) -> StoreResult<Product>;

  /// `StoreError::NotFound` when no row has this id.
  async fn delete(&self, id: Uuid) -> StoreResult<()>;

  /// Removes every product, returning how many rows were deleted.
  async fn clear(&self) -> StoreResult<u64>;

  async fn health_check(&self) -> StoreResult<()>;

  fn backend_name(&self) -> &'static str;
}
