//! Towns table endpoints
//!
//! Maps to the `towns` table: the administrative groupings that own delivery
//! zones and carry town-level delivery defaults.

use crate::client::DaylizClient;
use crate::error::ApiResult;
use serde::{Deserialize, Serialize};

/// Towns API interface
#[derive(Clone)]
pub struct TownsApi {
    client: DaylizClient,
}

impl TownsApi {
    /// Create a new towns API interface
    pub(crate) fn new(client: DaylizClient) -> Self {
        Self { client }
    }

    /// List all active towns, ordered by name
    ///
    /// GET /towns?is_active=eq.true
    ///
    /// # Errors
    /// Returns [`crate::ApiError`] for transport or server failures.
    pub async fn list_active(&self) -> ApiResult<Vec<TownRow>> {
        self.client
            .get("towns?is_active=eq.true&select=*&order=name.asc")
            .await
    }

    /// Fetch a single town by id
    ///
    /// GET /towns?id=eq.{id}
    ///
    /// # Errors
    /// Returns [`crate::ApiError`] for transport or server failures. An
    /// unknown id yields `Ok(None)`.
    pub async fn get(&self, id: &str) -> ApiResult<Option<TownRow>> {
        let rows: Vec<TownRow> = self
            .client
            .get(&format!("towns?id=eq.{id}&select=*&limit=1"))
            .await?;
        Ok(rows.into_iter().next())
    }
}

/// A row of the `towns` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TownRow {
    /// Unique identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// State the town belongs to
    pub state: String,
    /// Active flag
    pub is_active: bool,
    /// Default delivery fee for the town's zones
    #[serde(default)]
    pub default_delivery_fee: f64,
    /// Default minimum order amount
    #[serde(default)]
    pub default_min_order_amount: f64,
    /// Default delivery ETA text
    #[serde(default)]
    pub default_estimated_delivery_time: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_town_row_deserializes_with_defaults() {
        let json = r#"{"id": "t1", "name": "Tura", "state": "Meghalaya", "is_active": true}"#;
        let row: TownRow = serde_json::from_str(json).unwrap();
        assert_eq!(row.default_delivery_fee, 0.0);
        assert_eq!(row.default_estimated_delivery_time, "");
    }
}
