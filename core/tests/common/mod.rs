// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use catalog::{AppType, CatalogService, CreateProductRequest, InMemoryProductRepository, Product, UpdateProductRequest};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::Level;

// --- Service Builders ---
pub fn memory_service() -> (CatalogService, Arc<InMemoryProductRepository>) {
  let repository = Arc::new(InMemoryProductRepository::new());
  (CatalogService::new(repository.clone()), repository)
}

// --- Payload Helpers ---
pub fn create_request(body: Value) -> CreateProductRequest {
  CreateProductRequest::from_body(body).expect("create payload should deserialize")
}

pub fn update_request(body: Value) -> UpdateProductRequest {
  UpdateProductRequest::from_body(body).expect("update payload should deserialize")
}

pub fn mouse_request() -> CreateProductRequest {
  create_request(json!({
    "name": "Mouse",
    "description": "Ergonomic wireless mouse",
    "price": 39.99,
    "image": "https://example.com/mouse.png",
    "category": "Accessories",
    "appType": 2
  }))
}

pub async fn create_named(service: &CatalogService, name: &str, app_type: Option<AppType>) -> Product {
  let mut body = json!({ "name": name, "price": 10 });
  if let Some(app_type) = app_type {
    body["appType"] = json!(app_type.as_i32());
  }
  service.create(create_request(body)).await.expect("create should succeed")
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
