//! Server configuration

use clap::Parser;
use std::net::SocketAddr;

/// Command-line and environment configuration for the registry server.
#[derive(Parser, Debug, Clone)]
#[command(name = "georeg-server")]
#[command(about = "Geospatial entity registry HTTP server")]
pub struct ServerConfig {
    /// Address to listen on
    #[arg(long, env = "GEOREG_LISTEN_ADDR", default_value = "0.0.0.0:3000")]
    pub listen_addr: SocketAddr,

    /// Enable CORS (Cross-Origin Resource Sharing)
    #[arg(long, env = "GEOREG_CORS_ENABLED", default_value = "false")]
    pub cors_enabled: bool,

    /// Request body size limit in bytes (default 1MB)
    #[arg(long, env = "GEOREG_BODY_LIMIT", default_value = "1048576")]
    pub body_limit: usize,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "GEOREG_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        // Parse with no CLI args so the declared defaults apply.
        Self::parse_from(std::iter::empty::<std::ffi::OsString>())
    }
}
