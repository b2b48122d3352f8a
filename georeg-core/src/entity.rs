//! The entity record and its field validation.

use crate::error::{RegistryError, Result};
use georeg_geo::GeoPoint;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Position fields that are typed on [`Entity`] rather than kept in the
/// extra-field map.
const POSITION_FIELDS: [&str; 3] = ["latitude", "longitude", "altitude"];

/// A stored entity: a position plus arbitrary client-supplied fields.
///
/// `latitude` and `longitude` are radians; `altitude` is a unit-less
/// pass-through that no geo computation ever reads. Everything else the
/// client sent at create/update time lives in `extra` and is serialized
/// flat into the entity's JSON object.
///
/// Invariant: the three position fields are numeric at all times.
/// [`Entity::from_fields`] and [`Entity::merge`] enforce this.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Latitude in radians.
    pub latitude: f64,
    /// Longitude in radians.
    pub longitude: f64,
    /// Altitude, stored but never interpreted.
    pub altitude: f64,
    /// Uninterpreted extra fields, flattened into the JSON object.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Entity {
    /// Build an entity from a raw field map.
    ///
    /// Requires numeric `latitude`, `longitude`, and `altitude`; any
    /// `id` key in the map is dropped (the externally supplied id wins).
    /// Remaining fields pass through untouched.
    pub fn from_fields(mut fields: Map<String, Value>) -> Result<Self> {
        let latitude = require_number(&fields, "latitude")?;
        let longitude = require_number(&fields, "longitude")?;
        let altitude = require_number(&fields, "altitude")?;

        fields.remove("id");
        for field in POSITION_FIELDS {
            fields.remove(field);
        }

        Ok(Self {
            latitude,
            longitude,
            altitude,
            extra: fields,
        })
    }

    /// Merge a patch into this entity, field by field.
    ///
    /// Only the named fields are touched. A position field named in the
    /// patch must be numeric; on any validation error nothing is
    /// applied.
    pub fn merge(&mut self, patch: Map<String, Value>) -> Result<()> {
        for field in POSITION_FIELDS {
            if let Some(value) = patch.get(field) {
                if value.as_f64().is_none() {
                    return Err(RegistryError::invalid_input(format!(
                        "field {field} must be a number"
                    )));
                }
            }
        }

        for (field, value) in patch {
            match field.as_str() {
                "latitude" => self.latitude = value.as_f64().unwrap_or(self.latitude),
                "longitude" => self.longitude = value.as_f64().unwrap_or(self.longitude),
                "altitude" => self.altitude = value.as_f64().unwrap_or(self.altitude),
                _ => {
                    self.extra.insert(field, value);
                }
            }
        }
        Ok(())
    }

    /// The entity's position as a [`GeoPoint`] (radians).
    pub fn position(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }
}

/// Extract a required numeric field from a raw field map.
fn require_number(fields: &Map<String, Value>, field: &str) -> Result<f64> {
    fields
        .get(field)
        .and_then(Value::as_f64)
        .ok_or_else(|| RegistryError::invalid_input(format!("must contain {field} as a number")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(v: Value) -> Map<String, Value> {
        v.as_object().unwrap().clone()
    }

    #[test]
    fn from_fields_requires_numeric_position() {
        let err = Entity::from_fields(fields(json!({
            "latitude": 0.1, "longitude": 0.2
        })))
        .unwrap_err();
        assert!(matches!(err, RegistryError::InvalidInput(_)));

        let err = Entity::from_fields(fields(json!({
            "latitude": "north", "longitude": 0.2, "altitude": 0.0
        })))
        .unwrap_err();
        assert!(matches!(err, RegistryError::InvalidInput(_)));
    }

    #[test]
    fn from_fields_drops_id_and_keeps_extras() {
        let entity = Entity::from_fields(fields(json!({
            "id": "drone-1",
            "latitude": 0.1, "longitude": 0.2, "altitude": 300.0,
            "callsign": "RAVEN"
        })))
        .unwrap();

        assert_eq!(entity.latitude, 0.1);
        assert!(!entity.extra.contains_key("id"));
        assert_eq!(entity.extra["callsign"], json!("RAVEN"));
    }

    #[test]
    fn serializes_flat() {
        let entity = Entity::from_fields(fields(json!({
            "latitude": 0.1, "longitude": 0.2, "altitude": 300.0,
            "callsign": "RAVEN"
        })))
        .unwrap();

        let v = serde_json::to_value(&entity).unwrap();
        assert_eq!(v["latitude"], json!(0.1));
        assert_eq!(v["callsign"], json!("RAVEN"));
    }

    #[test]
    fn merge_touches_only_named_fields() {
        let mut entity = Entity::from_fields(fields(json!({
            "latitude": 0.1, "longitude": 0.2, "altitude": 300.0,
            "callsign": "RAVEN", "squadron": "blue"
        })))
        .unwrap();

        entity
            .merge(fields(json!({ "altitude": 250.0, "callsign": "HAWK" })))
            .unwrap();

        assert_eq!(entity.altitude, 250.0);
        assert_eq!(entity.extra["callsign"], json!("HAWK"));
        assert_eq!(entity.extra["squadron"], json!("blue"));
        assert_eq!(entity.latitude, 0.1);
    }

    #[test]
    fn merge_rejects_non_numeric_position_and_applies_nothing() {
        let mut entity = Entity::from_fields(fields(json!({
            "latitude": 0.1, "longitude": 0.2, "altitude": 300.0
        })))
        .unwrap();
        let before = entity.clone();

        let err = entity
            .merge(fields(json!({ "callsign": "HAWK", "latitude": "up" })))
            .unwrap_err();

        assert!(matches!(err, RegistryError::InvalidInput(_)));
        assert_eq!(entity, before);
    }
}
