//! Zones table endpoints
//!
//! Maps to the `zones` table. Zone geometry is stored in two column groups:
//! polygon zones carry a `boundary_coordinates` jsonb array of points, circle
//! zones carry `center_lat`/`center_lng`/`radius_km`. `zone_type` says which
//! group applies; validation of that invariant happens during model
//! conversion in `dayliz-zone-data`.

use crate::client::DaylizClient;
use crate::error::ApiResult;
use serde::{Deserialize, Serialize};

/// Zones API interface
#[derive(Clone)]
pub struct ZonesApi {
    client: DaylizClient,
}

impl ZonesApi {
    /// Create a new zones API interface
    pub(crate) fn new(client: DaylizClient) -> Self {
        Self { client }
    }

    /// List all active zones across towns
    ///
    /// GET /zones?is_active=eq.true
    ///
    /// # Errors
    /// Returns [`crate::ApiError`] for transport or server failures.
    pub async fn list_active(&self) -> ApiResult<Vec<ZoneRow>> {
        self.client
            .get("zones?is_active=eq.true&select=*&order=zone_number.asc")
            .await
    }

    /// List a town's active zones
    ///
    /// GET /zones?town_id=eq.{town_id}&is_active=eq.true
    ///
    /// # Errors
    /// Returns [`crate::ApiError`] for transport or server failures.
    pub async fn list_for_town(&self, town_id: &str) -> ApiResult<Vec<ZoneRow>> {
        self.client
            .get(&format!(
                "zones?town_id=eq.{town_id}&is_active=eq.true&select=*&order=zone_number.asc"
            ))
            .await
    }

    /// Fetch a single zone by id
    ///
    /// GET /zones?id=eq.{id}
    ///
    /// # Errors
    /// Returns [`crate::ApiError`] for transport or server failures. An
    /// unknown id yields `Ok(None)`.
    pub async fn get(&self, id: &str) -> ApiResult<Option<ZoneRow>> {
        let rows: Vec<ZoneRow> = self
            .client
            .get(&format!("zones?id=eq.{id}&select=*&limit=1"))
            .await?;
        Ok(rows.into_iter().next())
    }
}

/// A row of the `zones` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneRow {
    /// Unique identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Owning town id
    pub town_id: String,
    /// Ordinal within the town
    #[serde(default)]
    pub zone_number: u32,
    /// Shape discriminator: `polygon` or `circle`
    pub zone_type: String,
    /// Boundary points for polygon zones (array of `{lat, lng}` objects)
    #[serde(default)]
    pub boundary_coordinates: Option<serde_json::Value>,
    /// Center latitude for circle zones
    #[serde(default)]
    pub center_lat: Option<f64>,
    /// Center longitude for circle zones
    #[serde(default)]
    pub center_lng: Option<f64>,
    /// Radius in kilometers for circle zones
    #[serde(default)]
    pub radius_km: Option<f64>,
    /// Active flag
    pub is_active: bool,
    /// Delivery fee inside this zone
    #[serde(default)]
    pub delivery_fee: f64,
    /// Minimum order amount
    #[serde(default)]
    pub min_order_amount: f64,
    /// Delivery ETA text
    #[serde(default)]
    pub estimated_delivery_time: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_polygon_zone_row_deserializes() {
        let row: ZoneRow = serde_json::from_value(json!({
            "id": "z1",
            "name": "Main Bazaar",
            "town_id": "t1",
            "zone_number": 1,
            "zone_type": "polygon",
            "boundary_coordinates": [
                {"lat": 25.513, "lng": 90.206},
                {"lat": 25.513, "lng": 90.208},
                {"lat": 25.515, "lng": 90.208}
            ],
            "is_active": true,
            "delivery_fee": 25.0
        }))
        .unwrap();

        assert_eq!(row.zone_type, "polygon");
        assert!(row.boundary_coordinates.is_some());
        assert!(row.center_lat.is_none());
    }

    #[test]
    fn test_circle_zone_row_deserializes() {
        let row: ZoneRow = serde_json::from_value(json!({
            "id": "z2",
            "name": "Guwahati Central",
            "town_id": "t2",
            "zone_type": "circle",
            "center_lat": 26.1445,
            "center_lng": 91.7362,
            "radius_km": 5.0,
            "is_active": true
        }))
        .unwrap();

        assert_eq!(row.zone_type, "circle");
        assert_eq!(row.radius_km, Some(5.0));
        assert!(row.boundary_coordinates.is_none());
        assert_eq!(row.zone_number, 0);
    }
}
