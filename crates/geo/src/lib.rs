//! Geospatial primitives for Dayliz delivery-zone detection.
//!
//! This crate provides:
//! - Haversine distance calculations
//! - Point-in-polygon and point-in-circle containment tests
//! - Parsing of stored lat/lng point representations (Supabase jsonb)
//!
//! # Example
//!
//! ```
//! use dayliz_geo::{haversine_distance, Coordinate};
//!
//! let tura = Coordinate::new(25.5138, 90.2022);
//! let guwahati = Coordinate::new(26.1445, 91.7362);
//!
//! let distance_km = haversine_distance(&tura, &guwahati);
//! assert!((distance_km - 169.0).abs() < 5.0); // ~169 km
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod containment;
mod haversine;
mod latlng;

pub use containment::{point_in_circle, point_in_polygon, polygon_centroid};
pub use haversine::{haversine_distance, haversine_distance_meters, EARTH_RADIUS_KM, EARTH_RADIUS_M};
pub use latlng::{parse_lat_lng, LatLngPoint};

/// A geographic coordinate with latitude and longitude.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees (-90 to 90)
    pub latitude: f64,
    /// Longitude in degrees (-180 to 180)
    pub longitude: f64,
}

impl Coordinate {
    /// Creates a new coordinate.
    ///
    /// # Arguments
    /// * `latitude` - Latitude in degrees (-90 to 90)
    /// * `longitude` - Longitude in degrees (-180 to 180)
    #[inline]
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Returns true if the coordinate has valid values.
    #[inline]
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.latitude >= -90.0
            && self.latitude <= 90.0
            && self.longitude >= -180.0
            && self.longitude <= 180.0
    }

    /// Converts degrees to radians for internal calculations.
    #[inline]
    pub(crate) fn to_radians(&self) -> (f64, f64) {
        (self.latitude.to_radians(), self.longitude.to_radians())
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self::new(lat, lng)
    }
}
