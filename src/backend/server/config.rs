/**
 * Server Configuration
 *
 * This module loads the server configuration and opens the favorites store.
 *
 * # Configuration Sources
 *
 * Values are resolved in this order, later sources winning:
 * 1. Built-in defaults suitable for local development
 * 2. An optional TOML file named by `FAVORITES_CONFIG`
 * 3. Environment variables (a `.env` file is loaded first if present)
 *
 * | Variable | Default |
 * |---|---|
 * | `SERVER_PORT` | `3000` |
 * | `DATABASE_URL` | unset (in-memory store) |
 * | `JWT_SECRET` | development secret |
 * | `CORS_ALLOWED_ORIGINS` | `http://localhost:3000,https://localhost:3443` |
 * | `BULK_ADD_POLICY` | `reject` |
 * | `RUST_LOG` | `info` |
 *
 * # Error Handling
 *
 * Invalid values fail startup with a `ConfigError`. A database that cannot
 * be reached is logged and the server falls back to the in-memory store.
 */

use serde::Deserialize;
use sqlx::PgPool;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::backend::favorites::{FavoritesStore, InMemoryFavoritesStore, PostgresFavoritesStore};
use crate::shared::BulkAddPolicy;

const DEV_JWT_SECRET: &str = "campsite-favorites-dev-secret";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {message}")]
    InvalidValue { key: &'static str, message: String },
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Resolved server configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub port: u16,
    pub database_url: Option<String>,
    pub jwt_secret: String,
    pub cors_allowed_origins: Vec<String>,
    pub bulk_add_policy: BulkAddPolicy,
    pub log_filter: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            database_url: None,
            jwt_secret: DEV_JWT_SECRET.to_string(),
            cors_allowed_origins: vec![
                "http://localhost:3000".to_string(),
                "https://localhost:3443".to_string(),
            ],
            bulk_add_policy: BulkAddPolicy::default(),
            log_filter: "info".to_string(),
        }
    }
}

impl ServerConfig {
    pub fn builder() -> ServerConfigBuilder {
        ServerConfigBuilder::default()
    }

    /// Whether the JWT secret is still the built-in development value
    pub fn uses_dev_secret(&self) -> bool {
        self.jwt_secret == DEV_JWT_SECRET
    }

    /// Apply the settings of a TOML file on top of this configuration
    pub fn merge_file(mut self, path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let file: FileConfig = toml::from_str(&raw).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })?;

        if let Some(port) = file.port {
            self.port = port;
        }
        if file.database_url.is_some() {
            self.database_url = file.database_url;
        }
        if let Some(secret) = file.jwt_secret {
            self.jwt_secret = secret;
        }
        if let Some(origins) = file.cors_allowed_origins {
            self.cors_allowed_origins = origins;
        }
        if let Some(policy) = file.bulk_add_policy {
            self.bulk_add_policy = policy;
        }
        if let Some(filter) = file.log_filter {
            self.log_filter = filter;
        }
        Ok(self)
    }

    /// Apply environment variable overrides
    pub fn merge_env(mut self) -> Result<Self, ConfigError> {
        if let Some(port) = env_var("SERVER_PORT") {
            self.port = port.parse().map_err(|e: std::num::ParseIntError| {
                ConfigError::InvalidValue {
                    key: "SERVER_PORT",
                    message: e.to_string(),
                }
            })?;
        }
        if let Some(url) = env_var("DATABASE_URL") {
            self.database_url = Some(url);
        }
        if let Some(secret) = env_var("JWT_SECRET") {
            self.jwt_secret = secret;
        }
        if let Some(origins) = env_var("CORS_ALLOWED_ORIGINS") {
            self.cors_allowed_origins = split_origins(&origins);
        }
        if let Some(policy) = env_var("BULK_ADD_POLICY") {
            self.bulk_add_policy = policy.parse().map_err(|e: crate::shared::SharedError| {
                ConfigError::InvalidValue {
                    key: "BULK_ADD_POLICY",
                    message: e.to_string(),
                }
            })?;
        }
        if let Some(filter) = env_var("RUST_LOG") {
            self.log_filter = filter;
        }
        Ok(self)
    }
}

/// Shape of the optional TOML configuration file
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    port: Option<u16>,
    database_url: Option<String>,
    jwt_secret: Option<String>,
    cors_allowed_origins: Option<Vec<String>>,
    bulk_add_policy: Option<BulkAddPolicy>,
    log_filter: Option<String>,
}

/// Builder for ServerConfig
#[derive(Debug, Default)]
pub struct ServerConfigBuilder {
    config: ServerConfig,
}

impl ServerConfigBuilder {
    pub fn port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.config.database_url = Some(url.into());
        self
    }

    pub fn jwt_secret(mut self, secret: impl Into<String>) -> Self {
        self.config.jwt_secret = secret.into();
        self
    }

    pub fn cors_allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.config.cors_allowed_origins = origins;
        self
    }

    pub fn bulk_add_policy(mut self, policy: BulkAddPolicy) -> Self {
        self.config.bulk_add_policy = policy;
        self
    }

    pub fn build(self) -> Result<ServerConfig, ConfigError> {
        if self.config.jwt_secret.is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "jwt_secret",
                message: "must not be empty".to_string(),
            });
        }
        Ok(self.config)
    }
}

fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn split_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Load configuration from defaults, `FAVORITES_CONFIG` and the environment
pub fn load_config() -> Result<ServerConfig, ConfigError> {
    dotenv::dotenv().ok();

    let mut config = ServerConfig::default();
    if let Some(path) = env_var("FAVORITES_CONFIG") {
        config = config.merge_file(Path::new(&path))?;
    }
    config.merge_env()
}

/// Open the favorites store described by `config`
///
/// # Returns
///
/// - A Postgres-backed store if `database_url` is set and reachable
/// - An in-memory store otherwise
///
/// Migration failures are logged but do not prevent startup.
pub async fn load_store(config: &ServerConfig) -> FavoritesStore {
    let Some(database_url) = &config.database_url else {
        tracing::warn!("DATABASE_URL not set. Favorites are kept in memory and lost on restart.");
        return FavoritesStore::new(InMemoryFavoritesStore::new());
    };

    tracing::info!("Connecting to database...");

    let pool = match PgPool::connect(database_url).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Failed to create database connection pool: {:?}", e);
            tracing::warn!("Falling back to the in-memory favorites store.");
            return FavoritesStore::new(InMemoryFavoritesStore::new());
        }
    };

    let store = PostgresFavoritesStore::new(pool);

    tracing::info!("Running database migrations...");
    match store.migrate().await {
        Ok(()) => tracing::info!("Database migrations completed successfully"),
        Err(e) => {
            tracing::error!("Failed to run database migrations: {}", e);
            tracing::warn!("Continuing without migrations - database might not be up to date");
        }
    }

    FavoritesStore::new(store)
}
