//! Environment-driven configuration.
//!
//! Every variable except `DATABASE_URL` is optional and falls back to a default. Empty
//! values are treated the same as unset ones.

use std::net::SocketAddr;

use crate::server::{
    error::config::ConfigError,
    model::app::{IngestSettings, DEFAULT_MAX_UPLOAD_BYTES},
    scorecard::FieldRules,
};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_LOG_LEVEL: &str = "info";

/// Application configuration read from the environment.
pub struct Config {
    /// Connection URL of the relational store (`DATABASE_URL`)
    pub database_url: String,
    /// Address the HTTP listener binds to (`BIND_ADDRESS`)
    pub bind_address: SocketAddr,
    /// Largest accepted upload in bytes (`MAX_UPLOAD_BYTES`)
    pub max_upload_bytes: usize,
    /// Index-stripped field paths which must be present in every scorecard
    pub required_fields: Vec<String>,
    /// Fallback tracing filter used when `RUST_LOG` is unset (`LOG_LEVEL`)
    pub log_level: String,
}

impl Config {
    /// Reads configuration from environment variables.
    ///
    /// # Returns
    /// - `Ok(Config)` - Configuration with defaults applied to unset optional variables
    /// - `Err(ConfigError::MissingEnvVar)` - `DATABASE_URL` is unset or empty
    /// - `Err(ConfigError::InvalidEnvValue)` - `BIND_ADDRESS` or `MAX_UPLOAD_BYTES` cannot be parsed
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads configuration through `lookup`, which resolves a variable name to its value.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let database_url =
            var("DATABASE_URL").ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".into()))?;

        let bind_address = var("BIND_ADDRESS")
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvValue {
                var: "BIND_ADDRESS".to_string(),
                reason: e.to_string(),
            })?;

        let max_upload_bytes = match var("MAX_UPLOAD_BYTES") {
            Some(value) => value
                .parse::<usize>()
                .ok()
                .filter(|bytes| *bytes > 0)
                .ok_or_else(|| ConfigError::InvalidEnvValue {
                    var: "MAX_UPLOAD_BYTES".to_string(),
                    reason: format!("expected a positive number of bytes, got '{}'", value),
                })?,
            None => DEFAULT_MAX_UPLOAD_BYTES,
        };

        let required_fields = var("SCOREBOOK_REQUIRED_FIELDS")
            .map(|value| {
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|field| !field.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        let log_level = var("LOG_LEVEL").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        Ok(Self {
            database_url,
            bind_address,
            max_upload_bytes,
            required_fields,
            log_level,
        })
    }

    /// Ingestion settings derived from this configuration.
    pub fn ingest_settings(&self) -> IngestSettings {
        IngestSettings {
            max_upload_bytes: self.max_upload_bytes,
            rules: FieldRules::with_required(self.required_fields.iter()),
        }
    }
}
