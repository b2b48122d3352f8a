//! Great-circle distance and bearing math for the georeg registry.
//!
//! All angles are **radians** end to end: stored entity positions, query
//! coordinates, and bearing windows alike. Distances are reported in
//! nautical miles.
//!
//! Nothing in this crate validates its inputs. Callers guarantee finite
//! numeric values; the HTTP layer performs that validation before any of
//! these functions run.

use serde::{Deserialize, Serialize};

/// Earth radius in meters (spherical model).
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Conversion factor from kilometers to nautical miles.
pub const KM_TO_NM: f64 = 0.539956803;

/// A latitude/longitude pair in radians.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in radians.
    pub latitude: f64,
    /// Longitude in radians.
    pub longitude: f64,
}

impl GeoPoint {
    /// Create a point from radian coordinates.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Great-circle distance between two points in nautical miles.
///
/// Haversine formula on a sphere of radius [`EARTH_RADIUS_M`], converted
/// to nautical miles via [`KM_TO_NM`]. Symmetric in its arguments; the
/// distance from a point to itself is exactly zero.
pub fn distance_nm(a: GeoPoint, b: GeoPoint) -> f64 {
    let delta_lat = b.latitude - a.latitude;
    let delta_lon = b.longitude - a.longitude;

    let h = (delta_lat / 2.0).sin().powi(2)
        + a.latitude.cos() * b.latitude.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    (EARTH_RADIUS_M * c / 1000.0) * KM_TO_NM
}

/// Initial bearing in radians from `from` toward `to`, in `(-π, π]`.
///
/// This is the heading at the *start* of the great-circle path; it is not
/// symmetric, and `initial_bearing(a, b)` is only approximately
/// `initial_bearing(b, a) + π` for nearby points.
pub fn initial_bearing(from: GeoPoint, to: GeoPoint) -> f64 {
    let delta_lon = to.longitude - from.longitude;

    let y = delta_lon.sin() * to.latitude.cos();
    let x = from.latitude.cos() * to.latitude.sin()
        - from.latitude.sin() * to.latitude.cos() * delta_lon.cos();

    y.atan2(x)
}

/// Test whether `bearing` lies inside the angular window `[min, max]`.
///
/// When `min <= max` this is plain interval membership. When `min > max`
/// the window wraps through the π/−π seam and the legacy predicate
/// `bearing <= min || bearing <= max` applies. Note that the wrap arm
/// also admits bearings below *both* bounds, and rejects bearings above
/// both; callers relying on wrapped windows inherit that behavior.
///
/// Inputs are not normalized to any range; all three values must already
/// be on a consistent radian scale.
pub fn bearing_in_window(bearing: f64, min: f64, max: f64) -> bool {
    if min <= max {
        bearing >= min && bearing <= max
    } else {
        bearing <= min || bearing <= max
    }
}
