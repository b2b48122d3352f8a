//! Geospatial query endpoints: /entities-around, /entities-in-bearing,
//! /closest-entity
//!
//! Query-string validation lives here: the registry receives
//! already-parsed, finite floats. All coordinates and bearings are
//! radians on the wire; distances are nautical miles.

use crate::error::{Result, ServerError};
use crate::state::AppState;
use axum::extract::{Query, State};
use axum::Json;
use georeg_core::Entity;
use georeg_geo::GeoPoint;
use indexmap::IndexMap;
use serde::Deserialize;
use std::sync::Arc;

/// Query parameters for /entities-around
#[derive(Deserialize)]
pub struct RangeParams {
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    pub radius: Option<String>,
}

/// Entities within a radius
///
/// GET /entities-around?latitude=&longitude=&radius=
///
/// Returns all entities within `radius` nautical miles of the given
/// coordinates, capped at 50 entries. The boundary is inclusive: an
/// entity exactly at the radius is returned.
pub async fn entities_around(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RangeParams>,
) -> Result<Json<IndexMap<String, Entity>>> {
    let latitude = require_number(params.latitude.as_deref(), "latitude")?;
    let longitude = require_number(params.longitude.as_deref(), "longitude")?;
    let radius = require_non_negative(params.radius.as_deref(), "radius")?;

    let center = GeoPoint::new(latitude, longitude);
    let registry = state.registry.read();
    let matches = registry.entities_around(center, radius);

    tracing::debug!(radius_nm = radius, matched = matches.len(), "range query");
    Ok(Json(matches))
}

/// Query parameters for /entities-in-bearing
#[derive(Deserialize)]
pub struct BearingParams {
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    pub radius: Option<String>,
    #[serde(rename = "minBearing")]
    pub min_bearing: Option<String>,
    #[serde(rename = "maxBearing")]
    pub max_bearing: Option<String>,
}

/// Entities within a radius and bearing window
///
/// GET /entities-in-bearing?latitude=&longitude=&radius=&minBearing=&maxBearing=
///
/// Returns entities strictly inside `radius` whose bearing from the
/// given coordinates falls within `[minBearing, maxBearing]`, capped at
/// 50 entries. A window of at least 2π covers the full circle and
/// behaves exactly like /entities-around.
pub async fn entities_in_bearing(
    State(state): State<Arc<AppState>>,
    Query(params): Query<BearingParams>,
) -> Result<Json<IndexMap<String, Entity>>> {
    let latitude = require_number(params.latitude.as_deref(), "latitude")?;
    let longitude = require_number(params.longitude.as_deref(), "longitude")?;
    let radius = require_non_negative(params.radius.as_deref(), "radius")?;
    let min_bearing = require_number(params.min_bearing.as_deref(), "minBearing")?;
    let max_bearing = require_number(params.max_bearing.as_deref(), "maxBearing")?;

    let center = GeoPoint::new(latitude, longitude);
    let registry = state.registry.read();
    let matches = registry.entities_in_bearing(center, radius, min_bearing, max_bearing);

    tracing::debug!(
        radius_nm = radius,
        min_bearing,
        max_bearing,
        matched = matches.len(),
        "bearing query"
    );
    Ok(Json(matches))
}

/// Query parameters for /closest-entity
#[derive(Deserialize)]
pub struct ClosestParams {
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    pub id: Option<String>,
}

/// The closest entity to a reference point
///
/// GET /closest-entity?latitude=&longitude=
/// GET /closest-entity?id=
///
/// The two input modes are mutually exclusive. In id mode the named
/// entity is excluded, so it never matches itself, and an unknown id is
/// 404. Returns a one-entry id → entity mapping; 404 when no candidate
/// entity exists.
pub async fn closest_entity(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ClosestParams>,
) -> Result<Json<IndexMap<String, Entity>>> {
    let coordinates = match (params.latitude.as_deref(), params.longitude.as_deref()) {
        (None, None) => None,
        (latitude, longitude) => {
            // A lone latitude or longitude is rejected outright.
            let latitude = parse_finite(latitude);
            let longitude = parse_finite(longitude);
            match (latitude, longitude) {
                (Some(lat), Some(lon)) => Some(GeoPoint::new(lat, lon)),
                _ => {
                    return Err(ServerError::bad_request(
                        "must have both latitude and longitude as numbers",
                    ))
                }
            }
        }
    };

    let registry = state.registry.read();
    let (id, entity) = registry.closest(coordinates, params.id.as_deref())?;

    tracing::debug!(closest_id = %id, "closest-entity query");
    let mut result = IndexMap::new();
    result.insert(id, entity);
    Ok(Json(result))
}

/// Parse an optional query-string value as a finite float.
fn parse_finite(value: Option<&str>) -> Option<f64> {
    value.and_then(|v| v.parse::<f64>().ok()).filter(|v| v.is_finite())
}

/// A required numeric query parameter.
fn require_number(value: Option<&str>, field: &str) -> Result<f64> {
    parse_finite(value)
        .ok_or_else(|| ServerError::bad_request(format!("input must include {field} as a number")))
}

/// A required non-negative numeric query parameter.
fn require_non_negative(value: Option<&str>, field: &str) -> Result<f64> {
    let number = require_number(value, field)?;
    if number < 0.0 {
        return Err(ServerError::bad_request(format!(
            "input must include {field} as a non-negative number"
        )));
    }
    Ok(number)
}
