//! Supabase-backed location store.

use crate::error::LocationResult;
use crate::record::{LocationType, NewUserLocation, UserLocationRecord};
use crate::store::LocationStore;
use dayliz_api_client::endpoints::{LocationsApi, NewUserLocationRow, UserLocationRow};
use dayliz_api_client::DaylizClient;
use dayliz_geo::Coordinate;
use tracing::warn;

/// Location store persisting to the `user_locations` table.
#[derive(Clone)]
pub struct SupabaseLocationStore {
    api: LocationsApi,
}

impl SupabaseLocationStore {
    /// Creates a store over an existing client.
    #[must_use]
    pub fn new(client: DaylizClient) -> Self {
        Self { api: client.user_locations() }
    }
}

/// Converts a stored row into the record model.
///
/// Rows with an unknown `location_type` are skipped with a warning rather
/// than failing the whole listing; like malformed zones, they are a
/// data-quality problem for the row, not the request.
fn record_from_row(row: UserLocationRow) -> Option<UserLocationRecord> {
    let location_type = match row.location_type.parse::<LocationType>() {
        Ok(kind) => kind,
        Err(error) => {
            warn!(location_id = %row.id, %error, "discarding location row with unknown type");
            return None;
        }
    };

    Some(UserLocationRecord {
        id: row.id,
        user_id: row.user_id,
        coordinates: Coordinate::new(row.latitude, row.longitude),
        address_text: row.address_text,
        formatted_address: row.formatted_address,
        place_id: row.place_id,
        zone_id: row.zone_id,
        town_id: row.town_id,
        location_type,
        is_primary: row.is_primary,
        created_at: row.created_at,
    })
}

fn row_from_new(location: NewUserLocation) -> NewUserLocationRow {
    NewUserLocationRow {
        user_id: location.user_id,
        latitude: location.coordinates.latitude,
        longitude: location.coordinates.longitude,
        address_text: location.address_text,
        formatted_address: location.formatted_address,
        place_id: location.place_id,
        zone_id: location.zone_id,
        town_id: location.town_id,
        location_type: location.location_type.as_str().to_string(),
        is_primary: location.is_primary,
    }
}

impl LocationStore for SupabaseLocationStore {
    async fn insert(&self, location: NewUserLocation) -> LocationResult<UserLocationRecord> {
        let row = self.api.insert(&row_from_new(location)).await?;
        record_from_row(row).ok_or_else(|| {
            dayliz_api_client::ApiError::api_response(500, "insert returned an unreadable row")
                .into()
        })
    }

    async fn list_for_user(&self, user_id: &str) -> LocationResult<Vec<UserLocationRecord>> {
        let rows = self.api.list_for_user(user_id).await?;
        Ok(rows.into_iter().filter_map(record_from_row).collect())
    }

    async fn get(&self, location_id: &str) -> LocationResult<Option<UserLocationRecord>> {
        let row = self.api.get(location_id).await?;
        Ok(row.and_then(record_from_row))
    }

    async fn clear_primary(&self, user_id: &str) -> LocationResult<()> {
        self.api.clear_primary(user_id).await?;
        Ok(())
    }

    async fn set_primary(&self, location_id: &str) -> LocationResult<()> {
        self.api.set_primary(location_id).await?;
        Ok(())
    }

    async fn delete(&self, location_id: &str) -> LocationResult<()> {
        self.api.delete(location_id).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_row() -> UserLocationRow {
        UserLocationRow {
            id: "loc-1".into(),
            user_id: "u1".into(),
            latitude: 25.514,
            longitude: 90.207,
            address_text: "Main Bazaar, Tura".into(),
            formatted_address: None,
            place_id: None,
            zone_id: Some("tura-z1".into()),
            town_id: Some("tura".into()),
            location_type: "gps".into(),
            is_primary: true,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_record_from_row() {
        let record = record_from_row(sample_row()).unwrap();
        assert_eq!(record.location_type, LocationType::Gps);
        assert!((record.coordinates.latitude - 25.514).abs() < 1e-9);
        assert_eq!(record.zone_id.as_deref(), Some("tura-z1"));
    }

    #[test]
    fn test_unknown_location_type_is_skipped() {
        let mut row = sample_row();
        row.location_type = "teleport".into();
        assert!(record_from_row(row).is_none());
    }

    #[test]
    fn test_row_from_new_flattens_coordinates() {
        let row = row_from_new(NewUserLocation::new(
            "u1",
            Coordinate::new(26.1445, 91.7362),
            "GS Road, Guwahati",
            LocationType::Search,
        ));
        assert!((row.latitude - 26.1445).abs() < 1e-9);
        assert_eq!(row.location_type, "search");
    }
}
