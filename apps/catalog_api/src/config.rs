// apps/catalog_api/src/config.rs

use crate::errors::{AppError, Result}; // Use AppError specific Result
use dotenvy::dotenv;
use std::env;

pub const DEFAULT_SERVER_HOST: &str = "127.0.0.1";
pub const DEFAULT_SERVER_PORT: u16 = 3001;
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_DB_ACQUIRE_TIMEOUT_MS: u64 = 5_000;

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
  pub url: String,
  pub max_connections: u32,
  pub acquire_timeout_ms: u64,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,

  // None selects the in-memory repository.
  pub database: Option<DatabaseConfig>,

  // Empty means any origin may call the API.
  pub cors_allowed_origins: Vec<String>,

  // Replace the catalog with the demo products on startup.
  pub seed_db: bool,
}

impl Default for AppConfig {
  fn default() -> Self {
    Self {
      server_host: DEFAULT_SERVER_HOST.to_string(),
      server_port: DEFAULT_SERVER_PORT,
      database: None,
      cors_allowed_origins: Vec::new(),
      seed_db: false,
    }
  }
}

fn optional_env(var_name: &str) -> Option<String> {
  env::var(var_name).ok().map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

fn parse_env<T>(var_name: &str, default: T) -> Result<T>
where
  T: std::str::FromStr,
  T::Err: std::fmt::Display,
{
  match optional_env(var_name) {
    Some(raw) => raw
      .parse::<T>()
      .map_err(|e| AppError::Config(format!("Invalid {} value '{}': {}", var_name, raw, e))),
    None => Ok(default),
  }
}

/// Splits a comma-separated origin list, dropping blanks and trailing slashes.
pub fn parse_origins(raw: &str) -> Vec<String> {
  raw
    .split(',')
    .map(|origin| origin.trim().trim_end_matches('/').to_string())
    .filter(|origin| !origin.is_empty())
    .collect()
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present

    let server_host = optional_env("SERVER_HOST").unwrap_or_else(|| DEFAULT_SERVER_HOST.to_string());
    let server_port = parse_env("SERVER_PORT", DEFAULT_SERVER_PORT)?;

    let database = match optional_env("DATABASE_URL") {
      Some(url) => Some(DatabaseConfig {
        url,
        max_connections: parse_env("DB_MAX_CONNECTIONS", DEFAULT_DB_MAX_CONNECTIONS)?,
        acquire_timeout_ms: parse_env("DB_ACQUIRE_TIMEOUT_MS", DEFAULT_DB_ACQUIRE_TIMEOUT_MS)?,
      }),
      None => None,
    };

    let cors_allowed_origins = optional_env("CORS_ALLOWED_ORIGINS")
      .map(|raw| parse_origins(&raw))
      .unwrap_or_default();

    let seed_db = parse_env("SEED_DB", false)?;

    tracing::info!("Application configuration loaded successfully.");
    // Never log the database URL; it usually carries credentials.
    tracing::debug!(
      server_host = %server_host,
      server_port,
      durable_store = database.is_some(),
      cors_origins = cors_allowed_origins.len(),
      seed_db,
      "Loaded config details"
    );

    Ok(Self {
      server_host,
      server_port,
      database,
      cors_allowed_origins,
      seed_db,
    })
  }

  pub fn bind_address(&self) -> String {
    format!("{}:{}", self.server_host, self.server_port)
  }
}
