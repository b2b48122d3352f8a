//! Range, bearing-window, and nearest-neighbor scans over the store.
//!
//! All three scan the store in insertion order. Range and bearing
//! results truncate at `max_results` *by that order*, not by proximity;
//! when more entities match than fit in a page, the returned set is the
//! earliest-inserted matches, not the nearest ones. "Closest N" is a
//! different operation that does not exist here.

use crate::entity::Entity;
use crate::store::EntityStore;
use georeg_geo::{bearing_in_window, distance_nm, initial_bearing, GeoPoint};
use indexmap::IndexMap;
use std::f64::consts::PI;

/// Entities within `radius_nm` of `center`, in insertion order.
///
/// The distance test is **inclusive**: an entity exactly at the radius
/// is returned. The scan stops once `max_results` entities have been
/// collected. An empty result is a normal outcome, not an error.
pub fn entities_in_range(
    center: GeoPoint,
    radius_nm: f64,
    store: &EntityStore,
    max_results: usize,
) -> IndexMap<String, Entity> {
    let mut matches = IndexMap::new();
    for (id, entity) in store.iter() {
        if matches.len() == max_results {
            break;
        }
        if distance_nm(center, entity.position()) <= radius_nm {
            matches.insert(id.clone(), entity.clone());
        }
    }
    matches
}

/// Entities within `radius_nm` of `center` whose bearing from `center`
/// falls in the `[min_bearing, max_bearing]` window.
///
/// A window spanning at least a full circle (`|min − max| >= 2π`)
/// degenerates to [`entities_in_range`]; bearing is irrelevant then.
/// Otherwise the distance test is **strict** (`< radius_nm`), unlike the
/// inclusive range query; an entity exactly at the radius is excluded.
pub fn entities_in_bearing(
    center: GeoPoint,
    radius_nm: f64,
    min_bearing: f64,
    max_bearing: f64,
    store: &EntityStore,
    max_results: usize,
) -> IndexMap<String, Entity> {
    if (min_bearing - max_bearing).abs() >= 2.0 * PI {
        return entities_in_range(center, radius_nm, store, max_results);
    }

    let mut matches = IndexMap::new();
    for (id, entity) in store.iter() {
        if matches.len() == max_results {
            break;
        }
        if distance_nm(center, entity.position()) < radius_nm {
            let bearing = initial_bearing(center, entity.position());
            if bearing_in_window(bearing, min_bearing, max_bearing) {
                matches.insert(id.clone(), entity.clone());
            }
        }
    }
    matches
}

/// Id of the entity closest to `reference`, skipping ids in `exclude`.
///
/// Scans the whole store; ties keep the first-seen entity (the
/// comparison against the running minimum is strictly less-than).
/// Returns `None` when no candidate remains after exclusion.
pub fn find_closest<'a>(
    reference: GeoPoint,
    store: &'a EntityStore,
    exclude: &[&str],
) -> Option<&'a str> {
    let mut min_dist = f64::INFINITY;
    let mut closest = None;

    for (id, entity) in store.iter() {
        if exclude.contains(&id.as_str()) {
            continue;
        }
        let dist = distance_nm(entity.position(), reference);
        if dist < min_dist {
            closest = Some(id.as_str());
            min_dist = dist;
        }
    }
    closest
}
