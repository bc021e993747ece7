// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use catalog::{InMemoryProductRepository, ProductRepository};
use catalog_api::config::AppConfig;
use catalog_api::state::AppState;
use std::sync::Arc;

pub fn memory_state() -> AppState {
  state_with(Arc::new(InMemoryProductRepository::new()))
}

pub fn state_with(repository: Arc<dyn ProductRepository>) -> AppState {
  AppState::with_repository(AppConfig::default(), repository)
}

/// Builds the same App as `main.rs` (minus request logging) around `$state`.
macro_rules! catalog_app {
  ($state:expr) => {
    catalog_app!($state, Vec::<String>::new())
  };
  ($state:expr, $origins:expr) => {
    actix_web::test::init_service(
      actix_web::App::new()
        .app_data(actix_web::web::Data::new($state))
        .wrap(catalog_api::web::build_cors(&$origins))
        .wrap(actix_web::middleware::NormalizePath::trim())
        .configure(catalog_api::web::configure_app_routes)
        .default_service(actix_web::web::to(catalog_api::web::route_not_found)),
    )
    .await
  };
}
