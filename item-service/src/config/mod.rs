//! Configuration module for item-service.

use secrecy::Secret;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct ItemServiceConfig {
    pub common: core_config::Config,
    pub service_name: String,
    pub service_version: String,
    pub log_level: String,
    pub otlp_endpoint: Option<String>,
    pub store: StoreBackend,
    pub database: DatabaseConfig,
}

/// Which [`ItemStore`](crate::services::ItemStore) implementation backs the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Postgres,
    /// Process-local; only meaningful for a single instance.
    Memory,
}

impl FromStr for StoreBackend {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(Self::Postgres),
            "memory" => Ok(Self::Memory),
            other => Err(AppError::ConfigError(anyhow::anyhow!(
                "Unknown ITEM_STORE '{}', expected 'postgres' or 'memory'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: Secret<String>,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout: Duration,
    /// Total time spent retrying the initial connection before giving up.
    pub connect_timeout: Duration,
}

impl ItemServiceConfig {
    pub fn from_env() -> Result<Self, AppError> {
        let common = core_config::Config::load()?;

        let store = match env::var("ITEM_STORE") {
            Ok(value) => value.parse()?,
            Err(_) => StoreBackend::Postgres,
        };

        Ok(Self {
            common,
            service_name: env::var("SERVICE_NAME").unwrap_or_else(|_| "item-service".to_string()),
            service_version: env::var("SERVICE_VERSION")
                .unwrap_or_else(|_| env!("CARGO_PKG_VERSION").to_string()),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            otlp_endpoint: env::var("OTLP_ENDPOINT").ok().filter(|s| !s.is_empty()),
            store,
            database: DatabaseConfig {
                url: Secret::new(database_url_from_env()),
                max_connections: parse_env("DATABASE_MAX_CONNECTIONS", 10),
                min_connections: parse_env("DATABASE_MIN_CONNECTIONS", 1),
                acquire_timeout: Duration::from_secs(parse_env(
                    "DATABASE_ACQUIRE_TIMEOUT_SECS",
                    5,
                )),
                connect_timeout: Duration::from_secs(parse_env(
                    "DATABASE_CONNECT_TIMEOUT_SECS",
                    30,
                )),
            },
        })
    }
}

/// `DATABASE_URL` wins; otherwise the URL is assembled from the `DB_*` variables
/// a compose file typically passes to each replica.
fn database_url_from_env() -> String {
    if let Ok(url) = env::var("DATABASE_URL") {
        return url;
    }

    compose_database_url(
        &env::var("DB_HOST").unwrap_or_else(|_| "db".to_string()),
        &env::var("DB_PORT").unwrap_or_else(|_| "5432".to_string()),
        &env::var("DB_NAME").unwrap_or_else(|_| "mydb".to_string()),
        &env::var("DB_USER").unwrap_or_else(|_| "myuser".to_string()),
        &env::var("DB_PASSWORD").unwrap_or_else(|_| "mypassword".to_string()),
    )
}

fn compose_database_url(host: &str, port: &str, name: &str, user: &str, password: &str) -> String {
    format!("postgres://{}:{}@{}:{}/{}", user, password, host, port, name)
}

fn parse_env<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}
