// apps/catalog_api/src/web/handlers/product_handlers.rs

use actix_web::{web, HttpResponse};
use catalog::{parse_product_id, CreateProductRequest, ListProductsQuery, UpdateProductRequest};
use serde_json::Value;
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::state::AppState;

#[instrument(name = "handler::list_products", skip(app_state, query_params), fields(app_type = ?query_params.app_type))]
pub async fn list_products_handler(
  app_state: web::Data<AppState>,
  query_params: web::Query<ListProductsQuery>,
) -> Result<HttpResponse, AppError> {
  let filter = query_params.into_inner().into_filter()?;
  let products = app_state.catalog.list(filter).await?;
  info!("Returning {} products.", products.len());
  Ok(HttpResponse::Ok().json(products))
}

#[instrument(name = "handler::get_product", skip(app_state, path), fields(product_id = %path.as_ref()))]
pub async fn get_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let product_id = parse_product_id(&path.into_inner())?;
  let product = app_state.catalog.get(product_id).await?;
  Ok(HttpResponse::Ok().json(product))
}

#[instrument(name = "handler::create_product", skip(app_state, req_payload))]
pub async fn create_product_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<Value>,
) -> Result<HttpResponse, AppError> {
  let request = CreateProductRequest::from_body(req_payload.into_inner())?;
  let product = app_state.catalog.create(request).await?;
  Ok(HttpResponse::Created().json(product))
}

#[instrument(name = "handler::update_product", skip(app_state, path, req_payload), fields(product_id = %path.as_ref()))]
pub async fn update_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
  req_payload: web::Json<Value>,
) -> Result<HttpResponse, AppError> {
  let product_id = parse_product_id(&path.into_inner())?;
  let request = UpdateProductRequest::from_body(req_payload.into_inner())?;
  let product = app_state.catalog.update(product_id, request).await?;
  Ok(HttpResponse::Ok().json(product))
}

#[instrument(name = "handler::delete_product", skip(app_state, path), fields(product_id = %path.as_ref()))]
pub async fn delete_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let product_id = parse_product_id(&path.into_inner())?;
  app_state.catalog.delete(product_id).await?;
  Ok(HttpResponse::NoContent().finish())
}
