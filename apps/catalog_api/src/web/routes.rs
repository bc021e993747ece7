// apps/catalog_api/src/web/routes.rs

use actix_web::web;

use crate::errors::AppError;
use crate::web::handlers::{product_handlers, system_handlers};

fn json_config() -> web::JsonConfig {
  web::JsonConfig::default()
    .error_handler(|err, _req| AppError::Validation(format!("Invalid JSON body: {}", err)).into())
}

fn query_config() -> web::QueryConfig {
  web::QueryConfig::default()
    .error_handler(|err, _req| AppError::Validation(format!("Invalid query string: {}", err)).into())
}

// Called in `main.rs` (and the HTTP tests) to configure services for the Actix App.
// Every resource falls back to the JSON 404 so unsupported methods look like unknown routes.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg
    .app_data(json_config())
    .app_data(query_config())
    .service(
      web::resource("/health")
        .route(web::get().to(system_handlers::health_check_handler))
        .default_service(web::to(system_handlers::route_not_found)),
    )
    .service(
      web::scope("/api")
        .service(
          web::resource("/hello")
            .route(web::get().to(system_handlers::hello_handler))
            .default_service(web::to(system_handlers::route_not_found)),
        )
        .service(
          web::resource("/products")
            .route(web::get().to(product_handlers::list_products_handler))
            .route(web::post().to(product_handlers::create_product_handler))
            .default_service(web::to(system_handlers::route_not_found)),
        )
        .service(
          web::resource("/products/{product_id}")
            .route(web::get().to(product_handlers::get_product_handler))
            .route(web::put().to(product_handlers::update_product_handler))
            .route(web::delete().to(product_handlers::delete_product_handler))
            .default_service(web::to(system_handlers::route_not_found)),
        ),
    );
}
