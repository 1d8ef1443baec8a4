//! Service configuration, read once from the environment at startup.

use std::env;
use std::path::PathBuf;

use thiserror::Error;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_ENVIRONMENT: &str = "local";
pub const DEFAULT_SERVICE_NAME: &str = "game-history-api";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}")]
    Invalid { key: &'static str, value: String },
}

/// Runtime settings for the HTTP service.
///
/// Built by [`Config::from_env`] and passed into the server; nothing else
/// reads the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub environment: String,
    pub service_name: String,
    pub version: String,
    /// JSON file with an array of games to seed. The built-in sample games
    /// are used when unset.
    pub seed_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            environment: DEFAULT_ENVIRONMENT.to_string(),
            service_name: DEFAULT_SERVICE_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            seed_path: None,
        }
    }
}

impl Config {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `PORT` - Listen port (default: 8080)
    /// - `ENVIRONMENT` - Deployment environment name (default: local)
    /// - `SERVICE_NAME` - Name reported by the health check (default: game-history-api)
    /// - `SERVICE_VERSION` - Version reported by the health check (default: crate version)
    /// - `SEED_FILE` - Path to a JSON array of games to load at startup
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let mut config = Self::default();

        if let Some(port) = read("PORT") {
            config.port = port.trim().parse().map_err(|_| ConfigError::Invalid {
                key: "PORT",
                value: port.clone(),
            })?;
        }
        if let Some(environment) = read("ENVIRONMENT") {
            config.environment = environment;
        }
        if let Some(service_name) = read("SERVICE_NAME") {
            config.service_name = service_name;
        }
        if let Some(version) = read("SERVICE_VERSION") {
            config.version = version;
        }
        config.seed_path = read("SEED_FILE").map(PathBuf::from);

        Ok(config)
    }

    pub fn listen_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}
