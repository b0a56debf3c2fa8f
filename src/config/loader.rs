//! Configuration loader.
//!
//! Merge order, highest priority first:
//! 1. Environment variables
//! 2. Config file (config.toml)
//! 3. Defaults

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;

/// Configuration loading error.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// Config file search names, without extension.
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// Load the application configuration.
///
/// Environment variables use the `CAMBIO_` prefix with `__` as the
/// nesting separator:
/// - `CAMBIO_SERVER__PORT=8080`
/// - `CAMBIO_BACKENDS__USERS_URL=http://users:5001`
/// - `CAMBIO_BACKENDS__LEDGER_URL=http://ledger:5002`
/// - `CAMBIO_DEBUG=true`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// Load configuration from an explicit file path, or the default search
/// paths when `config_path` is `None`.
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // Defaults (lowest priority)
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 5000)?
        .set_default("backends.users_url", "http://api-secundaria-viacep:5001")?
        .set_default(
            "backends.ledger_url",
            "http://api-secundaria-frankfurter:5002",
        )?
        .set_default("log.level", "info")?
        .set_default("debug", false)?
        .set_default("secret_key", "dev_key")?;

    // Config file, if present
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // Environment variables (highest priority)
    builder = builder.add_source(
        Environment::with_prefix("CAMBIO")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;

    let app_config: AppConfig = config
        .try_deserialize()
        .map_err(|e| ConfigError::ParseError(format!("Failed to deserialize config: {}", e)))?;

    validate_config(&app_config)?;

    Ok(app_config)
}

fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    if config.backends.users_url.is_empty() {
        return Err(ConfigError::ValidationError(
            "User service URL cannot be empty".to_string(),
        ));
    }

    if config.backends.ledger_url.is_empty() {
        return Err(ConfigError::ValidationError(
            "Ledger service URL cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Log the effective configuration at startup.
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Gateway Configuration ===");
    tracing::info!("Server: {}", config.server.addr());
    tracing::info!("User service: {}", config.backends.users_url);
    tracing::info!("Ledger service: {}", config.backends.ledger_url);
    tracing::info!("Debug: {}", config.debug);
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=============================");
}
