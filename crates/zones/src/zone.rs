//! Delivery-zone model.
//!
//! A zone's geometry is a tagged sum type: either a polygon boundary or a
//! circle, never both. The shape constructors validate their invariants so a
//! malformed zone cannot be built through the public API; loaders reject rows
//! whose shapes fail to construct.

use crate::error::{Result, ZoneError};
use dayliz_geo::{
    haversine_distance, point_in_circle, point_in_polygon, polygon_centroid, Coordinate,
};
use serde::{Deserialize, Serialize};

/// The geometry of a delivery zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ZoneShape {
    /// Closed polygon ring; the last point connects implicitly to the first.
    Polygon {
        /// Ordered boundary vertices (at least 3)
        boundary: Vec<Coordinate>,
    },
    /// Circle around a center point.
    Circle {
        /// Center of the circle
        center: Coordinate,
        /// Radius in kilometers
        radius_km: f64,
    },
}

impl ZoneShape {
    /// Builds a polygon shape, validating the ring.
    ///
    /// # Errors
    /// Returns [`ZoneError::BoundaryTooSmall`] for rings of fewer than 3
    /// points and [`ZoneError::InvalidCoordinate`] when any vertex is out of
    /// range.
    pub fn polygon(boundary: Vec<Coordinate>) -> Result<Self> {
        if boundary.len() < 3 {
            return Err(ZoneError::BoundaryTooSmall { count: boundary.len() });
        }
        for point in &boundary {
            if !point.is_valid() {
                return Err(ZoneError::InvalidCoordinate {
                    latitude: point.latitude,
                    longitude: point.longitude,
                });
            }
        }
        Ok(Self::Polygon { boundary })
    }

    /// Builds a circle shape, validating center and radius.
    ///
    /// # Errors
    /// Returns [`ZoneError::InvalidCoordinate`] for an out-of-range center and
    /// [`ZoneError::InvalidRadius`] for a negative or non-finite radius.
    pub fn circle(center: Coordinate, radius_km: f64) -> Result<Self> {
        if !center.is_valid() {
            return Err(ZoneError::InvalidCoordinate {
                latitude: center.latitude,
                longitude: center.longitude,
            });
        }
        if !radius_km.is_finite() || radius_km < 0.0 {
            return Err(ZoneError::InvalidRadius { radius_km });
        }
        Ok(Self::Circle { center, radius_km })
    }
}

/// A bounded geographic area within which delivery is offered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    /// Unique identifier
    pub id: String,
    /// Display name, e.g. "Main Bazaar"
    pub name: String,
    /// Owning town (lookup reference, not ownership)
    pub town_id: String,
    /// Ordinal within the town, for display and ordering
    pub zone_number: u32,
    /// Zone geometry
    pub shape: ZoneShape,
    /// Inactive zones are excluded from detection
    pub is_active: bool,
    /// Delivery fee charged inside this zone
    pub delivery_fee: f64,
    /// Minimum order amount for this zone
    pub min_order_amount: f64,
    /// Delivery ETA text, e.g. "20-30 mins"
    pub estimated_delivery_time: String,
}

impl Zone {
    /// Creates an active zone with zeroed delivery metadata.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        town_id: impl Into<String>,
        zone_number: u32,
        shape: ZoneShape,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            town_id: town_id.into(),
            zone_number,
            shape,
            is_active: true,
            delivery_fee: 0.0,
            min_order_amount: 0.0,
            estimated_delivery_time: String::new(),
        }
    }

    /// Builder-style method to set the delivery fee.
    #[must_use]
    pub fn with_delivery_fee(mut self, fee: f64) -> Self {
        self.delivery_fee = fee;
        self
    }

    /// Builder-style method to set the minimum order amount.
    #[must_use]
    pub fn with_min_order_amount(mut self, amount: f64) -> Self {
        self.min_order_amount = amount;
        self
    }

    /// Builder-style method to set the delivery ETA text.
    #[must_use]
    pub fn with_estimated_delivery_time(mut self, eta: impl Into<String>) -> Self {
        self.estimated_delivery_time = eta.into();
        self
    }

    /// Builder-style method to set the active flag.
    #[must_use]
    pub fn with_active(mut self, active: bool) -> Self {
        self.is_active = active;
        self
    }

    /// Tests whether a coordinate lies inside this zone's geometry.
    ///
    /// Containment is purely geometric; the `is_active` flag is applied by the
    /// detection engine, not here.
    #[must_use]
    pub fn contains(&self, point: &Coordinate) -> bool {
        match &self.shape {
            ZoneShape::Polygon { boundary } => point_in_polygon(point, boundary),
            ZoneShape::Circle { center, radius_km } => {
                point_in_circle(point, center, *radius_km)
            }
        }
    }

    /// Approximate distance from a point to this zone in kilometers.
    ///
    /// The metric used for nearest-zone ranking: polygons measure haversine
    /// distance to the boundary centroid; circles measure distance to the
    /// circle edge (center distance minus radius, clamped at 0). Exact
    /// distance-to-polygon-edge is intentionally not computed.
    #[must_use]
    pub fn distance_km(&self, point: &Coordinate) -> f64 {
        match &self.shape {
            ZoneShape::Polygon { boundary } => polygon_centroid(boundary)
                .map_or(f64::INFINITY, |centroid| haversine_distance(point, &centroid)),
            ZoneShape::Circle { center, radius_km } => {
                (haversine_distance(point, center) - radius_km).max(0.0)
            }
        }
    }
}
