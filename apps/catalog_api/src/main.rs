// apps/catalog_api/src/main.rs

use actix_web::{middleware, web as actix_data, App, HttpServer}; // Renamed web to actix_data
use catalog_api::config::AppConfig;
use catalog_api::state::AppState;
use catalog_api::{telemetry, web};

// Main function
#[actix_web::main]
async fn main() -> anyhow::Result<()> {
  // Loaded before tracing starts so `.env` can set LOG_FORMAT and RUST_LOG.
  // `AppConfig::from_env` loads it again for callers that skip this step.
  dotenvy::dotenv().ok();
  telemetry::init_tracing();

  tracing::info!("Starting catalog API server...");

  // Load application configuration
  let app_config = AppConfig::from_env().inspect_err(|e| {
    tracing::error!(error = %e, "Failed to load application configuration.");
  })?;

  // Select and initialize the product store
  let app_state = AppState::initialize(app_config).await.inspect_err(|e| {
    tracing::error!(error = %e, "Failed to initialize the product store.");
  })?;

  match app_state.catalog.health_check().await {
    Ok(()) => tracing::info!(backend = app_state.catalog.backend_name(), "Product store is healthy."),
    Err(e) => tracing::warn!(error = %e, "Product store health check failed; serving anyway."),
  }

  // Seed database if configured
  if app_state.config.seed_db {
    let inserted = app_state.catalog.reseed().await?;
    tracing::info!(inserted, "Catalog reseeded with demo products.");
  }

  // Configure and Start Actix Web Server
  let server_address = app_state.config.bind_address();
  let cors_origins = app_state.config.cors_allowed_origins.clone();
  if cors_origins.is_empty() {
    tracing::info!("CORS: any origin allowed.");
  } else {
    tracing::info!(origins = ?cors_origins, "CORS: restricted to configured storefront origins.");
  }
  let shared_state = actix_data::Data::new(app_state);
  tracing::info!("Attempting to bind server to {}...", server_address);

  HttpServer::new(move || {
    App::new()
      .app_data(shared_state.clone()) // Share AppState with handlers
      .wrap(web::build_cors(&cors_origins))
      .wrap(middleware::NormalizePath::trim())
      .wrap(tracing_actix_web::TracingLogger::default()) // Actix middleware for tracing requests
      .configure(web::configure_app_routes)
      .default_service(actix_data::to(web::route_not_found))
  })
  .bind(&server_address)?
  .run()
  .await?;

  Ok(())
}
