// apps/catalog_api/src/lib.rs

//! HTTP front end of the product catalog: configuration, PostgreSQL storage,
//! error mapping and the actix-web routes.

pub mod config;
pub mod db;
pub mod errors;
pub mod state;
pub mod telemetry;
pub mod web;

pub use crate::config::AppConfig;
pub use crate::errors::{AppError, Result};
pub use crate::state::AppState;
