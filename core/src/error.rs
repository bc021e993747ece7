// catalog/src/error.rs
use anyhow::Error as AnyhowError;
use thiserror::Error;

/// Message returned when a product id does not match any row.
pub const PRODUCT_NOT_FOUND: &str = "Product not found";

/// Failures raised by a `ProductRepository`.
#[derive(Debug, Error)]
pub enum StoreError {
  #[error("not found: {0}")]
  NotFound(String),

  #[error(transparent)]
  Unexpected(#[from] AnyhowError),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Errors surfaced by catalog operations.
///
/// Each variant maps to exactly one response class at the HTTP boundary:
/// `Validation` is the caller's fault, `NotFound` means the id matched nothing,
/// and `Store` is anything the persistence layer could not complete.
#[derive(Debug, Error)]
pub enum CatalogError {
  #[error("Validation Error: {0}")]
  Validation(String),

  #[error("Resource Not Found: {0}")]
  NotFound(String),

  #[error("Store Error: {source}")]
  Store {
    #[source]
    source: AnyhowError,
  },
}

impl CatalogError {
  pub fn validation(message: impl Into<String>) -> Self {
    CatalogError::Validation(message.into())
  }

  pub fn product_not_found() -> Self {
    CatalogError::NotFound(PRODUCT_NOT_FOUND.to_string())
  }
}

impl From<StoreError> for CatalogError {
  fn from(err: StoreError) -> Self {
    match err {
      // Repositories only report NotFound for product rows.
      StoreError::NotFound(_) => CatalogError::product_not_found(),
      StoreError::Unexpected(source) => CatalogError::Store { source },
    }
  }
}

pub type CatalogResult<T, E = CatalogError> = std::result::Result<T, E>;
