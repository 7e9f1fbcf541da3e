//! User locations table endpoints
//!
//! Maps to the `user_locations` table: saved locations keyed by `user_id`,
//! with the resolved zone/town references and the per-user primary flag. The
//! exclusivity of that flag is enforced by `dayliz-locations`, which sequences
//! `clear_primary` and `set_primary` calls; this module only exposes the raw
//! operations.

use crate::client::DaylizClient;
use crate::error::ApiResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User locations API interface
#[derive(Clone)]
pub struct LocationsApi {
    client: DaylizClient,
}

impl LocationsApi {
    /// Create a new locations API interface
    pub(crate) fn new(client: DaylizClient) -> Self {
        Self { client }
    }

    /// List a user's saved locations in creation order
    ///
    /// GET /user_locations?user_id=eq.{user_id}
    ///
    /// # Errors
    /// Returns [`crate::ApiError`] for transport or server failures.
    pub async fn list_for_user(&self, user_id: &str) -> ApiResult<Vec<UserLocationRow>> {
        self.client
            .get(&format!(
                "user_locations?user_id=eq.{user_id}&select=*&order=created_at.asc"
            ))
            .await
    }

    /// Fetch a single location by id
    ///
    /// GET /user_locations?id=eq.{id}
    ///
    /// # Errors
    /// Returns [`crate::ApiError`] for transport or server failures. An
    /// unknown id yields `Ok(None)`.
    pub async fn get(&self, id: &str) -> ApiResult<Option<UserLocationRow>> {
        let rows: Vec<UserLocationRow> = self
            .client
            .get(&format!("user_locations?id=eq.{id}&select=*&limit=1"))
            .await?;
        Ok(rows.into_iter().next())
    }

    /// Insert a new location row, returning the created row
    ///
    /// POST /user_locations
    ///
    /// # Errors
    /// Returns [`crate::ApiError`] for transport or server failures, or when
    /// the insert response carries no row.
    pub async fn insert(&self, row: &NewUserLocationRow) -> ApiResult<UserLocationRow> {
        let mut created: Vec<UserLocationRow> =
            self.client.post("user_locations", row).await?;
        created
            .pop()
            .ok_or_else(|| crate::ApiError::api_response(500, "insert returned no row"))
    }

    /// Clear the primary flag on all of a user's locations
    ///
    /// PATCH /user_locations?user_id=eq.{user_id}&is_primary=eq.true
    ///
    /// # Errors
    /// Returns [`crate::ApiError`] for transport or server failures.
    pub async fn clear_primary(&self, user_id: &str) -> ApiResult<()> {
        self.client
            .patch(
                &format!("user_locations?user_id=eq.{user_id}&is_primary=eq.true"),
                &serde_json::json!({"is_primary": false}),
            )
            .await
    }

    /// Mark one location as primary
    ///
    /// PATCH /user_locations?id=eq.{id}
    ///
    /// # Errors
    /// Returns [`crate::ApiError`] for transport or server failures.
    pub async fn set_primary(&self, id: &str) -> ApiResult<()> {
        self.client
            .patch(
                &format!("user_locations?id=eq.{id}"),
                &serde_json::json!({"is_primary": true}),
            )
            .await
    }

    /// Delete a location row; deleting an unknown id succeeds silently
    ///
    /// DELETE /user_locations?id=eq.{id}
    ///
    /// # Errors
    /// Returns [`crate::ApiError`] for transport or server failures.
    pub async fn delete(&self, id: &str) -> ApiResult<()> {
        self.client
            .delete(&format!("user_locations?id=eq.{id}"))
            .await
    }
}

/// A row of the `user_locations` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserLocationRow {
    /// Unique identifier
    pub id: String,
    /// Owning user
    pub user_id: String,
    /// Latitude of the saved location
    pub latitude: f64,
    /// Longitude of the saved location
    pub longitude: f64,
    /// Address text the user confirmed
    pub address_text: String,
    /// Geocoder-formatted address, when available
    #[serde(default)]
    pub formatted_address: Option<String>,
    /// Place id from the geocoding provider, when available
    #[serde(default)]
    pub place_id: Option<String>,
    /// Resolved delivery zone, when detection succeeded
    #[serde(default)]
    pub zone_id: Option<String>,
    /// Resolved town, when detection succeeded
    #[serde(default)]
    pub town_id: Option<String>,
    /// How the location was captured: `gps`, `manual`, or `search`
    pub location_type: String,
    /// Per-user primary flag (at most one true per user)
    pub is_primary: bool,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// Insert payload for `user_locations`; id and timestamp are server-assigned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewUserLocationRow {
    /// Owning user
    pub user_id: String,
    /// Latitude of the saved location
    pub latitude: f64,
    /// Longitude of the saved location
    pub longitude: f64,
    /// Address text the user confirmed
    pub address_text: String,
    /// Geocoder-formatted address, when available
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatted_address: Option<String>,
    /// Place id from the geocoding provider, when available
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place_id: Option<String>,
    /// Resolved delivery zone, when detection succeeded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone_id: Option<String>,
    /// Resolved town, when detection succeeded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub town_id: Option<String>,
    /// How the location was captured
    pub location_type: String,
    /// Whether this location should become the user's primary
    pub is_primary: bool,
}
