// apps/catalog_api/src/web/cors.rs

use actix_cors::Cors;
use actix_web::http::header;

/// Builds the CORS middleware for the storefront origins.
///
/// An empty allow-list, or one containing `*`, allows every origin.
pub fn build_cors(allowed_origins: &[String]) -> Cors {
  if allowed_origins.is_empty() || allowed_origins.iter().any(|origin| origin == "*") {
    return Cors::permissive();
  }

  allowed_origins
    .iter()
    .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
    .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
    .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
    .max_age(3600)
}
