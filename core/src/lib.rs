// src/lib.rs

//! Catalog: the product catalog behind the storefront API.
//!
//! The crate provides:
//!  - The `Product` model and its `appType` storefront partition.
//!  - Request payloads that are validated into typed values before any business logic runs.
//!  - The `ProductRepository` trait with an in-memory implementation.
//!  - `CatalogService`, which runs list/get/create/update/delete against an injected repository.
//!  - The demo catalog used for seeding.

pub mod error;
pub mod input;
pub mod model;
pub mod repository;
pub mod seed;
pub mod service;

// --- Re-exports for the Public API ---

pub use crate::error::{CatalogError, CatalogResult, StoreError, StoreResult, PRODUCT_NOT_FOUND};
pub use crate::input::{parse_product_id, CreateProductRequest, ListProductsQuery, UpdateProductRequest};
pub use crate::model::{AppType, NewProduct, Product, ProductFilter, ProductPatch};
pub use crate::repository::{InMemoryProductRepository, ProductRepository};
pub use crate::service::CatalogService;

/*
    Typical wiring:
    1. Pick a repository (`InMemoryProductRepository::new()` or a durable one).
    2. `let catalog = CatalogService::new(Arc::new(repository));`
    3. Deserialize request bodies into `CreateProductRequest` / `UpdateProductRequest`
       and hand them to `catalog.create(..)` / `catalog.update(..)`; validation
       happens inside the service.
    4. Map `CatalogError` to the caller's error type: Validation, NotFound, Store.
*/
