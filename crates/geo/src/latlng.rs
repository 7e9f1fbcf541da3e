//! Parsing of stored lat/lng point representations.
//!
//! Supabase stores zone boundaries and centers as jsonb. The canonical Dayliz
//! encoding is an object with explicit field names, which avoids the ordering
//! ambiguity of bare arrays:
//!
//! ```json
//! {"lat": 25.5138, "lng": 90.2022}
//! ```
//!
//! For compatibility with PostGIS/GeoJSON-style exports, two more forms are
//! accepted on read: a `[lng, lat]` array (GeoJSON ordering) and a GeoJSON
//! Point object (`{"type": "Point", "coordinates": [lng, lat]}`).

use crate::Coordinate;
use serde::{Deserialize, Serialize};

/// The canonical stored form of a point: `{"lat": .., "lng": ..}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLngPoint {
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lng: f64,
}

impl From<Coordinate> for LatLngPoint {
    fn from(coord: Coordinate) -> Self {
        Self { lat: coord.latitude, lng: coord.longitude }
    }
}

impl From<LatLngPoint> for Coordinate {
    fn from(point: LatLngPoint) -> Self {
        Self::new(point.lat, point.lng)
    }
}

/// Parse a stored point from a JSON value.
///
/// This is the entry point for reading location data out of zone rows.
///
/// # Arguments
/// * `value` - A `serde_json::Value` that may contain point data
///
/// # Returns
/// * `Some(Coordinate)` if parsing succeeds
/// * `None` if the value is null or cannot be parsed
///
/// # Example
/// ```
/// use dayliz_geo::parse_lat_lng;
/// use serde_json::json;
///
/// // Canonical object form
/// let object = json!({"lat": 25.5138, "lng": 90.2022});
/// let coord = parse_lat_lng(&object).unwrap();
/// assert!((coord.latitude - 25.5138).abs() < 0.0001);
///
/// // GeoJSON-ordered array form: [lng, lat]
/// let array = json!([90.2022, 25.5138]);
/// let coord = parse_lat_lng(&array).unwrap();
/// assert!((coord.latitude - 25.5138).abs() < 0.0001);
/// ```
#[must_use]
pub fn parse_lat_lng(value: &serde_json::Value) -> Option<Coordinate> {
    if value.is_null() {
        return None;
    }

    if let Some(object) = value.as_object() {
        // Canonical {lat, lng} form, long field names accepted too
        let lat = object.get("lat").or_else(|| object.get("latitude"));
        let lng = object.get("lng").or_else(|| object.get("longitude"));
        if let (Some(lat), Some(lng)) = (lat, lng) {
            return Some(Coordinate::new(lat.as_f64()?, lng.as_f64()?));
        }

        // GeoJSON Point object
        if let Some(coords) = object.get("coordinates").and_then(|c| c.as_array()) {
            return coordinate_from_lng_lat(coords);
        }

        return None;
    }

    // Bare [lng, lat] array
    if let Some(coords) = value.as_array() {
        return coordinate_from_lng_lat(coords);
    }

    None
}

fn coordinate_from_lng_lat(coords: &[serde_json::Value]) -> Option<Coordinate> {
    if coords.len() < 2 {
        return None;
    }
    let lng = coords[0].as_f64()?;
    let lat = coords[1].as_f64()?;
    Some(Coordinate::new(lat, lng))
}
