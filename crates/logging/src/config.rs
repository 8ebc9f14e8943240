//! Logging configuration.

use tracing_subscriber::{filter::LevelFilter, fmt, prelude::*, Registry};

/// Logging configuration structure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Output format (json, pretty, compact)
    pub format: String,
}

impl LoggingConfig {
    /// Create configuration from environment variables, falling back to the
    /// given defaults. `RUST_LOG` wins over `level`, `WARREN_LOG_FORMAT`
    /// over `format`.
    pub fn from_env(level: &str, format: &str) -> Self {
        Self {
            level: std::env::var("RUST_LOG").unwrap_or_else(|_| level.to_string()),
            format: std::env::var("WARREN_LOG_FORMAT").unwrap_or_else(|_| format.to_string()),
        }
    }

    /// Build the tracing subscriber from this configuration.
    pub fn build(&self) -> Box<dyn tracing::Subscriber + Send + Sync> {
        let level: LevelFilter = self.level.parse().unwrap_or(LevelFilter::INFO);

        match self.format.as_str() {
            "pretty" => Box::new(Registry::default().with(level).with(fmt::layer().pretty())),
            "compact" => Box::new(Registry::default().with(level).with(fmt::layer().compact())),
            // json is the production default
            _ => Box::new(Registry::default().with(level).with(fmt::layer().json())),
        }
    }
}
