//! georeg Server CLI
//!
//! Run with: `cargo run -p georeg-server -- --help`

use clap::Parser;
use georeg_server::{
    telemetry::{init_logging, TelemetryConfig},
    RegistryServer, ServerConfig,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse CLI + env via clap
    let config = ServerConfig::parse();

    // Initialize telemetry
    let telemetry_config = TelemetryConfig::with_server_config(&config);
    init_logging(&telemetry_config);

    // Log startup info
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        addr = %config.listen_addr,
        cors = config.cors_enabled,
        log_format = ?telemetry_config.log_format,
        "Starting georeg server"
    );

    let server = RegistryServer::new(config);
    server.run().await.map_err(Into::into)
}
