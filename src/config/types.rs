//! Configuration types.

use serde::Deserialize;

/// Top-level application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Backend service base URLs.
    #[serde(default)]
    pub backends: BackendsConfig,

    /// Logging settings.
    #[serde(default)]
    pub log: LogConfig,

    /// Debug mode. Only affects the default log verbosity.
    #[serde(default)]
    pub debug: bool,

    /// Secret key carried over from the original deployment surface.
    /// No documented behavior reads it.
    #[serde(default = "default_secret_key")]
    pub secret_key: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            backends: BackendsConfig::default(),
            log: LogConfig::default(),
            debug: false,
            secret_key: default_secret_key(),
        }
    }
}

fn default_secret_key() -> String {
    "dev_key".to_string()
}

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Listen address.
    #[serde(default = "default_host")]
    pub host: String,

    /// Listen port.
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Base URLs of the two backend services that hold the actual state.
#[derive(Debug, Clone, Deserialize)]
pub struct BackendsConfig {
    /// User-management service (user CRUD + CEP lookup).
    #[serde(default = "default_users_url")]
    pub users_url: String,

    /// Quote/ledger service (cotação, transações, saldo).
    #[serde(default = "default_ledger_url")]
    pub ledger_url: String,
}

fn default_users_url() -> String {
    "http://api-secundaria-viacep:5001".to_string()
}

fn default_ledger_url() -> String {
    "http://api-secundaria-frankfurter:5002".to_string()
}

impl Default for BackendsConfig {
    fn default() -> Self {
        Self {
            users_url: default_users_url(),
            ledger_url: default_ledger_url(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// Log level for the gateway's own spans and events.
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}
