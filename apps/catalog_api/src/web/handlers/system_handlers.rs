// apps/catalog_api/src/web/handlers/system_handlers.rs

use actix_web::HttpResponse;
use serde_json::json;

use crate::errors::ROUTE_NOT_FOUND;

// Liveness only: it does not probe the store.
pub async fn health_check_handler() -> HttpResponse {
  HttpResponse::Ok().json(json!({ "status": "ok", "message": "API is running" }))
}

pub async fn hello_handler() -> HttpResponse {
  HttpResponse::Ok().json(json!({ "message": "Hello from API!" }))
}

pub async fn route_not_found() -> HttpResponse {
  HttpResponse::NotFound().json(json!({ "error": ROUTE_NOT_FOUND }))
}
