//! # Warren Logging Infrastructure
//!
//! Structured logging for the Warren application, built on `tracing` with
//! environment-based configuration.

pub mod config;

pub use config::LoggingConfig;
// Re-export tracing macros
pub use tracing::{debug, error, info, trace, warn};

/// Initialize the logging system.
///
/// # Arguments
///
/// * `level` - Log level (trace, debug, info, warn, error)
/// * `format` - Output format (json, pretty, compact)
pub fn init(level: &str, format: &str) -> Result<(), tracing::subscriber::SetGlobalDefaultError> {
    let config = LoggingConfig::from_env(level, format);
    tracing::subscriber::set_global_default(config.build())?;
    info!(level = %config.level, format = %config.format, "Logging initialized");
    Ok(())
}
