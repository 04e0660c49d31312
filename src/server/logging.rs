//! Tracing subscriber setup.

use tracing_subscriber::{filter::Directive, EnvFilter};

use crate::server::{config::Config, error::config::ConfigError};

/// Installs the global tracing subscriber.
///
/// The filter is read from `RUST_LOG` when set, otherwise from the configured log level.
/// Database driver output is capped at `warn` unless `RUST_LOG` names those targets itself.
pub fn init(config: &Config) -> Result<(), ConfigError> {
    let mut env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.log_level).map_err(|e| {
            ConfigError::InvalidEnvValue {
                var: "LOG_LEVEL".to_string(),
                reason: e.to_string(),
            }
        })?,
    };

    let directives = ["sqlx=warn", "sea_orm=warn", "sea_orm_migration=info"];

    for directive in directives {
        if let Ok(parsed) = directive.parse::<Directive>() {
            env_filter = env_filter.add_directive(parsed);
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_line_number(true)
        .try_init()
        .map_err(|e| ConfigError::Logging(e.to_string()))
}
