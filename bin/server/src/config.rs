//! Centralized server configuration.
//!
//! Loaded via the `config` crate from an optional TOML file, overridden by
//! `MY_TELEGRAMS__*` environment variables (`__` separates nested keys, e.g.
//! `MY_TELEGRAMS__BACKEND__BASE_URL`).
//!
//! See [`BackendConfig`] for the messaging backend settings.

use config::{Config, ConfigError, Environment, File};
use my_telegrams_integration::BackendConfig;
use serde::Deserialize;
use std::path::Path;

/// Prefix of environment variables read by [`ServerConfig::load`].
pub const ENV_PREFIX: &str = "MY_TELEGRAMS";

/// Server configuration composed from library configs.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Socket address the turn endpoint listens on.
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// Log filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// Messaging backend configuration.
    pub backend: BackendConfig,
}

fn default_bind_address() -> String {
    "127.0.0.1:3000".to_string()
}

fn default_log_filter() -> String {
    "info,tower_http=debug".to_string()
}

impl ServerConfig {
    /// Loads configuration from `path` (if given) and the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or required configuration
    /// is missing or invalid.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_with(path, Self::environment())
    }

    fn environment() -> Environment {
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true)
    }

    fn load_with(path: Option<&Path>, environment: Environment) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(true));
        }
        builder
            .add_source(environment)
            .build()?
            .try_deserialize()
    }
}
