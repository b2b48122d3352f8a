//! The operation surface the HTTP layer calls into.
//!
//! The registry owns the [`EntityStore`] and is handed in by whoever
//! bootstraps the process; there is no hidden global. Callers supply
//! already-validated numeric inputs (the HTTP layer parses and checks
//! query strings), and get back either data or a [`RegistryError`].

use crate::entity::Entity;
use crate::error::{RegistryError, Result};
use crate::query;
use crate::store::EntityStore;
use georeg_geo::GeoPoint;
use indexmap::IndexMap;
use serde_json::{Map, Value};

/// Hard cap on range/bearing query results. Part of the public
/// contract: responses never carry more entries than this, and there is
/// no cursor to fetch the rest.
pub const MAX_PAGE_SIZE: usize = 50;

/// In-memory entity registry.
#[derive(Debug, Default, Clone)]
pub struct Registry {
    store: EntityStore,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Full store snapshot, in insertion order.
    pub fn list_all(&self) -> &IndexMap<String, Entity> {
        self.store.get_all()
    }

    /// Look up an entity by id.
    pub fn get(&self, id: &str) -> Result<&Entity> {
        self.store
            .get(id)
            .ok_or_else(|| RegistryError::not_found(format!("no entity with id {id}")))
    }

    /// Register a new entity under `id`.
    ///
    /// Fails with `Conflict` if the id is taken, or `InvalidInput` if
    /// `latitude`, `longitude`, or `altitude` is missing or not a
    /// number. Extra fields pass through uninterpreted.
    pub fn create(&mut self, id: String, fields: Map<String, Value>) -> Result<()> {
        if self.store.exists(&id) {
            return Err(RegistryError::conflict(format!(
                "entity id {id} already exists"
            )));
        }
        let entity = Entity::from_fields(fields)?;
        self.store.put(id, entity);
        Ok(())
    }

    /// Merge `fields` into the entity under `id`.
    ///
    /// Only the named fields change; the store is untouched on any
    /// error.
    pub fn update(&mut self, id: &str, fields: Map<String, Value>) -> Result<()> {
        let entity = self
            .store
            .get(id)
            .ok_or_else(|| RegistryError::not_found(format!("cannot modify: no entity with id {id}")))?;

        let mut updated = entity.clone();
        updated.merge(fields)?;
        self.store.put(id.to_string(), updated);
        Ok(())
    }

    /// Remove the entity under `id`.
    pub fn delete(&mut self, id: &str) -> Result<()> {
        if !self.store.exists(id) {
            return Err(RegistryError::not_found(format!(
                "cannot delete: no entity with id {id}"
            )));
        }
        self.store.remove(id);
        Ok(())
    }

    /// Entities within `radius_nm` of `center`, capped at
    /// [`MAX_PAGE_SIZE`]. The caller guarantees `radius_nm >= 0`.
    pub fn entities_around(&self, center: GeoPoint, radius_nm: f64) -> IndexMap<String, Entity> {
        query::entities_in_range(center, radius_nm, &self.store, MAX_PAGE_SIZE)
    }

    /// Entities within `radius_nm` of `center` and inside the bearing
    /// window, capped at [`MAX_PAGE_SIZE`].
    pub fn entities_in_bearing(
        &self,
        center: GeoPoint,
        radius_nm: f64,
        min_bearing: f64,
        max_bearing: f64,
    ) -> IndexMap<String, Entity> {
        query::entities_in_bearing(
            center,
            radius_nm,
            min_bearing,
            max_bearing,
            &self.store,
            MAX_PAGE_SIZE,
        )
    }

    /// The entity closest to the given reference.
    ///
    /// Exactly one input mode must be supplied: ad hoc coordinates, or
    /// the id of a stored entity (which is excluded from the search so
    /// it never matches itself). Returns the winning `(id, entity)`
    /// pair, or `NotFound` when no candidate exists.
    pub fn closest(
        &self,
        coordinates: Option<GeoPoint>,
        id: Option<&str>,
    ) -> Result<(String, Entity)> {
        let closest_id = match (coordinates, id) {
            (Some(_), Some(_)) => {
                return Err(RegistryError::invalid_input(
                    "ambiguous input: supply latitude/longitude or id, not both",
                ))
            }
            (None, None) => {
                return Err(RegistryError::invalid_input(
                    "must supply latitude/longitude or id",
                ))
            }
            (Some(point), None) => query::find_closest(point, &self.store, &[]),
            (None, Some(id)) => {
                let reference = self.get(id)?.position();
                query::find_closest(reference, &self.store, &[id])
            }
        };

        let closest_id = closest_id
            .ok_or_else(|| RegistryError::not_found("no entity to return"))?
            .to_string();
        let entity = self.store.get(&closest_id).cloned();
        // find_closest only yields ids present in the store.
        let entity = entity.ok_or_else(|| RegistryError::not_found("no entity to return"))?;
        Ok((closest_id, entity))
    }

    /// Number of registered entities.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Whether the registry holds no entities.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}
