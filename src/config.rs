//! Application configuration loading and validation.
//!
//! Configuration is loaded from a TOML file with environment variable
//! overrides for sensitive values (`RCON_PASSWORD`, `APPWRITE_API_KEY`),
//! which are never read from the file.

use serde::Deserialize;
use std::path::Path;
use tracing_subscriber::{fmt, EnvFilter};
use url::Url;

use crate::error::{ConfigError, Result};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub identity: IdentityConfig,
    pub console: ConsoleConfig,
    pub store: StoreConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Identity provider (Mojang profile API) settings.
#[derive(Debug, Clone, Deserialize)]
pub struct IdentityConfig {
    /// Base URL of the profile endpoint.
    #[serde(default = "default_identity_endpoint")]
    pub endpoint: String,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_identity_endpoint() -> String {
    "https://api.mojang.com".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            endpoint: default_identity_endpoint(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Remote console (RCON) settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ConsoleConfig {
    pub host: String,
    #[serde(default = "default_console_port")]
    pub port: u16,
    /// Per-command timeout in seconds, covering connect, auth, and reply.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Loaded from the `RCON_PASSWORD` env var at runtime, never from file.
    #[serde(skip)]
    pub password: Option<String>,
}

fn default_console_port() -> u16 {
    25575
}

/// Document store (Appwrite-compatible REST API) settings.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    /// Base URL of the REST API, e.g. `https://cloud.appwrite.io/v1`.
    pub endpoint: String,
    pub project_id: String,
    pub database_id: String,
    pub collection_id: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Loaded from the `APPWRITE_API_KEY` env var at runtime, never from file.
    #[serde(skip)]
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// `pretty` or `json`.
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file, pull secrets from the
    /// environment, and validate the result.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let mut config: Config = toml::from_str(&content).map_err(ConfigError::Parse)?;

        config.console.password = std::env::var("RCON_PASSWORD").ok();
        config.store.api_key = std::env::var("APPWRITE_API_KEY").ok();

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        validate_url("identity.endpoint", &self.identity.endpoint)?;
        validate_url("store.endpoint", &self.store.endpoint)?;

        if self.console.host.is_empty() {
            return Err(ConfigError::MissingField { field: "console.host" }.into());
        }
        for (field, value) in [
            ("store.project_id", &self.store.project_id),
            ("store.database_id", &self.store.database_id),
            ("store.collection_id", &self.store.collection_id),
        ] {
            if value.is_empty() {
                return Err(ConfigError::MissingField { field }.into());
            }
        }
        if !matches!(self.logging.format.as_str(), "pretty" | "json") {
            return Err(ConfigError::InvalidValue {
                field: "logging.format",
                reason: format!("expected 'pretty' or 'json', got '{}'", self.logging.format),
            }
            .into());
        }
        Ok(())
    }

    /// Fail unless both runtime secrets are present. Called by commands
    /// that actually talk to the console or the store, so that `check
    /// config` can still validate a file without credentials.
    pub fn require_secrets(&self) -> Result<()> {
        if self.console.password.is_none() {
            return Err(ConfigError::MissingSecret { var: "RCON_PASSWORD" }.into());
        }
        if self.store.api_key.is_none() {
            return Err(ConfigError::MissingSecret { var: "APPWRITE_API_KEY" }.into());
        }
        Ok(())
    }

    /// Install the global tracing subscriber per the `[logging]` section.
    /// `RUST_LOG` overrides the configured level.
    pub fn init_logging(&self) {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(self.logging.level.clone()));

        if self.logging.format == "json" {
            fmt().with_env_filter(filter).json().init();
        } else {
            fmt().with_env_filter(filter).init();
        }
    }
}

fn validate_url(field: &'static str, value: &str) -> Result<()> {
    Url::parse(value).map_err(|e| ConfigError::InvalidValue {
        field,
        reason: e.to_string(),
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(toml_src: &str) -> Config {
        toml::from_str(toml_src).expect("config should parse")
    }

    const MINIMAL: &str = r#"
        [console]
        host = "mc.example.org"

        [store]
        endpoint = "https://cloud.appwrite.io/v1"
        project_id = "proj"
        database_id = "db"
        collection_id = "applications"
    "#;

    #[test]
    fn minimal_config_fills_defaults() {
        let config = parse(MINIMAL);
        assert_eq!(config.identity.endpoint, "https://api.mojang.com");
        assert_eq!(config.console.port, 25575);
        assert_eq!(config.console.timeout_secs, 10);
        assert_eq!(config.logging.level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn bad_logging_format_is_rejected() {
        let mut config = parse(MINIMAL);
        config.logging.format = "xml".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn empty_collection_id_is_rejected() {
        let mut config = parse(MINIMAL);
        config.store.collection_id = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn secrets_are_never_read_from_file() {
        let config = parse(MINIMAL);
        assert!(config.console.password.is_none());
        assert!(config.store.api_key.is_none());
    }
}
