//! Telemetry module for logging setup
//!
//! Provides unified logging configuration: `RUST_LOG` takes precedence,
//! falling back to `LOG_LEVEL` or the server config's log level, with an
//! optional JSON output format for log shippers.

use crate::config::ServerConfig;
use std::env;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Telemetry configuration
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    /// Primary log filter (RUST_LOG env var)
    pub log_filter: String,
    /// Fallback log level if RUST_LOG not set
    pub default_level: String,
    /// Log format ("human" or "json")
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Human,
    Json,
}

impl TelemetryConfig {
    /// Create telemetry config with server config for CLI log level support
    pub fn with_server_config(server_config: &ServerConfig) -> Self {
        let rust_log = env::var("RUST_LOG").unwrap_or_default();
        let default_level = if rust_log.is_empty() {
            env::var("LOG_LEVEL").unwrap_or_else(|_| server_config.log_level.clone())
        } else {
            server_config.log_level.clone()
        };

        Self::from_env_with_defaults(default_level)
    }

    fn from_env_with_defaults(default_level: String) -> Self {
        Self {
            log_filter: env::var("RUST_LOG").unwrap_or_default(),
            default_level,
            log_format: match env::var("LOG_FORMAT")
                .unwrap_or_default()
                .to_lowercase()
                .as_str()
            {
                "json" => LogFormat::Json,
                _ => LogFormat::Human,
            },
        }
    }
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        let rust_log = env::var("RUST_LOG").unwrap_or_default();
        let default_level = if rust_log.is_empty() {
            env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string())
        } else {
            "info".to_string()
        };

        Self::from_env_with_defaults(default_level)
    }
}

/// Initialize logging
///
/// Sets up the global tracing subscriber with an EnvFilter for level
/// filtering and either human-readable or JSON output.
///
/// Safe to call multiple times - will only initialize once.
pub fn init_logging(config: &TelemetryConfig) {
    if tracing::dispatcher::has_been_set() {
        tracing::debug!("tracing subscriber already initialized, skipping");
        return;
    }

    let filter = if config.log_filter.is_empty() {
        EnvFilter::new(&config.default_level)
    } else {
        EnvFilter::new(&config.log_filter)
    };

    let fmt_layer = match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt::layer().json().boxed(),
        LogFormat::Human => tracing_subscriber::fmt::layer().compact().boxed(),
    };

    // try_init rather than init: another thread may have set the
    // subscriber between the has_been_set() check and now (tests).
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
