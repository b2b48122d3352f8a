//! Insertion-ordered entity storage.

use crate::entity::Entity;
use indexmap::IndexMap;

/// An insertion-ordered mapping from id to entity.
///
/// Iteration order is insertion order, and it is load-bearing: range and
/// bearing scans truncate by this order, so which entities survive a
/// page cut depends on it. Removal uses `shift_remove` to keep the order
/// of the survivors intact.
#[derive(Debug, Default, Clone)]
pub struct EntityStore {
    entities: IndexMap<String, Entity>,
}

impl EntityStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up an entity by id.
    pub fn get(&self, id: &str) -> Option<&Entity> {
        self.entities.get(id)
    }

    /// The full ordered mapping.
    pub fn get_all(&self) -> &IndexMap<String, Entity> {
        &self.entities
    }

    /// Insert or overwrite an entity. Overwriting keeps the id's
    /// original position in the iteration order.
    pub fn put(&mut self, id: String, entity: Entity) {
        self.entities.insert(id, entity);
    }

    /// Remove an entity. No-op if the id is absent; existence checks
    /// belong to the caller.
    pub fn remove(&mut self, id: &str) {
        self.entities.shift_remove(id);
    }

    /// Whether an id is present.
    pub fn exists(&self, id: &str) -> bool {
        self.entities.contains_key(id)
    }

    /// Number of stored entities.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Iterate entities in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Entity)> {
        self.entities.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Map;

    fn entity(lat: f64, lon: f64) -> Entity {
        Entity {
            latitude: lat,
            longitude: lon,
            altitude: 0.0,
            extra: Map::new(),
        }
    }

    #[test]
    fn iteration_is_insertion_ordered() {
        let mut store = EntityStore::new();
        store.put("c".into(), entity(0.3, 0.0));
        store.put("a".into(), entity(0.1, 0.0));
        store.put("b".into(), entity(0.2, 0.0));

        let ids: Vec<&str> = store.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(ids, ["c", "a", "b"]);
    }

    #[test]
    fn remove_preserves_order_of_survivors() {
        let mut store = EntityStore::new();
        store.put("a".into(), entity(0.1, 0.0));
        store.put("b".into(), entity(0.2, 0.0));
        store.put("c".into(), entity(0.3, 0.0));

        store.remove("a");
        // Absent id removal is a no-op.
        store.remove("missing");

        let ids: Vec<&str> = store.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(ids, ["b", "c"]);
    }

    #[test]
    fn overwrite_keeps_position() {
        let mut store = EntityStore::new();
        store.put("a".into(), entity(0.1, 0.0));
        store.put("b".into(), entity(0.2, 0.0));
        store.put("a".into(), entity(0.9, 0.0));

        let ids: Vec<&str> = store.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(ids, ["a", "b"]);
        assert_eq!(store.get("a").unwrap().latitude, 0.9);
        assert_eq!(store.len(), 2);
    }
}
