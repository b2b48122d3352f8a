//! georeg HTTP Server
//!
//! A thin HTTP REST API wrapper around `georeg-core`, exposing the
//! in-memory geospatial entity registry.
//!
//! # Features
//!
//! - Entity CRUD (create, get, merge-update, delete, list)
//! - Proximity queries (range, bearing window, nearest neighbor)
//! - CORS support
//!
//! # Example
//!
//! ```ignore
//! use georeg_server::{RegistryServer, ServerConfig};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ServerConfig::default();
//!     let server = RegistryServer::new(config);
//!     server.run().await.unwrap();
//! }
//! ```

pub mod config;
pub mod error;
pub mod routes;
pub mod state;
pub mod telemetry;

pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use state::AppState;
pub use telemetry::{init_logging, TelemetryConfig};

use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// georeg HTTP Server
pub struct RegistryServer {
    /// Application state
    state: Arc<AppState>,
    /// Configured router
    router: Router,
}

impl RegistryServer {
    /// Create a new server with the given configuration
    pub fn new(config: ServerConfig) -> Self {
        let telemetry_config = TelemetryConfig::with_server_config(&config);
        let state = Arc::new(AppState::new(config, telemetry_config));
        let router = routes::build_router(state.clone());

        Self { state, router }
    }

    /// Get a reference to the application state
    pub fn state(&self) -> &Arc<AppState> {
        &self.state
    }

    /// Get the router for testing
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server
    pub async fn run(self) -> std::io::Result<()> {
        let addr = self.state.config.listen_addr;
        let listener = TcpListener::bind(addr).await?;

        info!(
            addr = %addr,
            cors = self.state.config.cors_enabled,
            "georeg server starting"
        );

        axum::serve(listener, self.router).await
    }
}
