//! In-memory geospatial entity registry.
//!
//! Entities carry a position (latitude/longitude in radians, plus an
//! uninterpreted altitude) under an opaque string identifier, and can be
//! queried by proximity, bearing window, or nearest neighbor.
//!
//! # Modules
//!
//! - [`entity`]: the entity record and its field validation
//! - [`store`]: insertion-ordered id → entity mapping
//! - [`query`]: range, bearing-window, and nearest-neighbor scans
//! - [`registry`]: the operation surface exposed to the HTTP layer
//! - [`error`]: error taxonomy (`NotFound` / `Conflict` / `InvalidInput`)
//!
//! The store has a single logical owner: every operation here runs to
//! completion over the store's current state with no interleaving. A
//! concurrent host wraps the [`Registry`] in one mutual-exclusion
//! mechanism and keeps each call linearized.

pub mod entity;
pub mod error;
pub mod query;
pub mod registry;
pub mod store;

pub use entity::Entity;
pub use error::{RegistryError, Result};
pub use query::{entities_in_bearing, entities_in_range, find_closest};
pub use registry::{Registry, MAX_PAGE_SIZE};
pub use store::EntityStore;
