//! Application state management
//!
//! # Thread Safety Note
//!
//! The registry itself is single-owner, in-memory state with no internal
//! locking. The HTTP server shares it across handlers behind a single
//! `parking_lot::RwLock`: queries take the read guard (a consistent
//! snapshot), mutations take the write guard, so every operation is
//! linearized and readers never observe a half-applied field merge.

use crate::config::ServerConfig;
use crate::telemetry::TelemetryConfig;
use georeg_core::Registry;
use parking_lot::RwLock;
use std::time::Instant;

/// Shared application state, handed to handlers as `Arc<AppState>`.
#[derive(Debug)]
pub struct AppState {
    /// Server configuration
    pub config: ServerConfig,
    /// Telemetry configuration
    pub telemetry_config: TelemetryConfig,
    /// The entity registry, explicitly initialized empty at startup.
    pub registry: RwLock<Registry>,
    /// Process start time, for /stats uptime reporting.
    started_at: Instant,
}

impl AppState {
    /// Create application state with an empty registry.
    pub fn new(config: ServerConfig, telemetry_config: TelemetryConfig) -> Self {
        Self {
            config,
            telemetry_config,
            registry: RwLock::new(Registry::new()),
            started_at: Instant::now(),
        }
    }

    /// Seconds since the server started.
    pub fn uptime_secs(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
