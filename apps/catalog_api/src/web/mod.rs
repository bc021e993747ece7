// apps/catalog_api/src/web/mod.rs

pub mod cors;
pub mod handlers;
pub mod routes;

pub use cors::build_cors;
pub use handlers::system_handlers::route_not_found;
pub use routes::configure_app_routes;
