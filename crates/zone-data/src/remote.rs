//! Remote zone/town source backed by the Supabase REST API.

use crate::convert::{town_from_row, zone_from_row, zones_from_rows};
use crate::error::{DataError, DataResult};
use crate::source::ZoneDataSource;
use dayliz_api_client::DaylizClient;
use dayliz_zones::{Town, Zone};
use tracing::warn;

/// Zone/town provider that queries the live backend.
///
/// Fetch failures surface as [`DataError::Source`]; choosing to degrade to
/// the offline dataset on such a failure is the composition root's call, not
/// this type's.
#[derive(Clone)]
pub struct RemoteZoneSource {
    client: DaylizClient,
}

impl RemoteZoneSource {
    /// Creates a source over an existing client.
    #[must_use]
    pub fn new(client: DaylizClient) -> Self {
        Self { client }
    }

    /// Creates a source with client configuration from the environment.
    ///
    /// # Errors
    /// Returns [`DataError::Source`] when the client configuration is
    /// invalid.
    pub fn from_env() -> DataResult<Self> {
        Ok(Self::new(DaylizClient::new()?))
    }
}

impl ZoneDataSource for RemoteZoneSource {
    async fn active_towns(&self) -> DataResult<Vec<Town>> {
        let rows = self.client.towns().list_active().await?;
        Ok(rows.into_iter().map(town_from_row).collect())
    }

    async fn town_by_id(&self, id: &str) -> DataResult<Town> {
        let row = self
            .client
            .towns()
            .get(id)
            .await?
            .ok_or_else(|| DataError::not_found("town", id))?;
        Ok(town_from_row(row))
    }

    async fn zones_for_town(&self, town_id: &str) -> DataResult<Vec<Zone>> {
        let rows = self.client.zones().list_for_town(town_id).await?;
        Ok(zones_from_rows(rows))
    }

    async fn all_active_zones(&self) -> DataResult<Vec<Zone>> {
        let rows = self.client.zones().list_active().await?;
        Ok(zones_from_rows(rows))
    }

    async fn zone_by_id(&self, id: &str) -> DataResult<Zone> {
        let row = self
            .client
            .zones()
            .get(id)
            .await?
            .ok_or_else(|| DataError::not_found("zone", id))?;

        // A stored row that fails validation is treated as absent: it is
        // already excluded from every active set, and surfacing it here would
        // leak a zone the rest of the system refuses to serve.
        zone_from_row(row).map_err(|error| {
            warn!(zone_id = %id, %error, "zone row failed validation, reporting as not found");
            DataError::not_found("zone", id)
        })
    }
}
