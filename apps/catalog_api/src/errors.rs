// apps/catalog_api/src/errors.rs

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use catalog::CatalogError;
use serde_json::json;
use thiserror::Error;

pub const ROUTE_NOT_FOUND: &str = "Route not found";
pub const INTERNAL_SERVER_ERROR: &str = "Internal server error";

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Validation Error: {0}")]
  Validation(String),

  #[error("Resource Not Found: {0}")]
  NotFound(String),

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Database Error: {0}")]
  Sqlx(#[from] sqlx::Error),

  #[error("Migration Error: {0}")]
  Migrate(#[from] sqlx::migrate::MigrateError),

  #[error("Internal Server Error: {0}")]
  Internal(String), // Details are logged, never returned
}

impl From<CatalogError> for AppError {
  fn from(err: CatalogError) -> Self {
    match err {
      CatalogError::Validation(message) => AppError::Validation(message),
      CatalogError::NotFound(message) => AppError::NotFound(message),
      CatalogError::Store { source } => AppError::Internal(format!("{:#}", source)),
    }
  }
}

impl ResponseError for AppError {
  fn status_code(&self) -> StatusCode {
    match self {
      AppError::Validation(_) => StatusCode::BAD_REQUEST,
      AppError::NotFound(_) => StatusCode::NOT_FOUND,
      _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn error_response(&self) -> HttpResponse {
    match self {
      AppError::Validation(m) | AppError::NotFound(m) => {
        tracing::warn!(application_error = %self, "Responding with client error");
        HttpResponse::build(self.status_code()).json(json!({ "error": m }))
      }
      _ => {
        // Log the full error here; the client only gets the generic message.
        tracing::error!(application_error = %self, "Responding with internal error");
        HttpResponse::InternalServerError().json(json!({ "error": INTERNAL_SERVER_ERROR }))
      }
    }
  }
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;
