//! User location record model.

use chrono::{DateTime, Utc};
use dayliz_geo::Coordinate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a saved location was captured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationType {
    /// Resolved from the device's GPS fix
    Gps,
    /// Pinned manually on the map
    Manual,
    /// Picked from address search results
    Search,
}

impl LocationType {
    /// The storage string for this type.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Gps => "gps",
            Self::Manual => "manual",
            Self::Search => "search",
        }
    }
}

impl fmt::Display for LocationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LocationType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gps" => Ok(Self::Gps),
            "manual" => Ok(Self::Manual),
            "search" => Ok(Self::Search),
            other => Err(format!("unknown location type: {other}")),
        }
    }
}

/// A saved user location with its resolved zone/town references.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserLocationRecord {
    /// Unique identifier
    pub id: String,
    /// Owning user
    pub user_id: String,
    /// The confirmed coordinates
    pub coordinates: Coordinate,
    /// Address text the user confirmed
    pub address_text: String,
    /// Geocoder-formatted address, when available
    pub formatted_address: Option<String>,
    /// Place id from the geocoding provider, when available
    pub place_id: Option<String>,
    /// Delivery zone resolved at save time, when detection succeeded
    pub zone_id: Option<String>,
    /// Town resolved at save time, when detection succeeded
    pub town_id: Option<String>,
    /// How the location was captured
    pub location_type: LocationType,
    /// Per-user primary flag (at most one true per user)
    pub is_primary: bool,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// Input for saving a new user location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewUserLocation {
    /// Owning user
    pub user_id: String,
    /// The confirmed coordinates
    pub coordinates: Coordinate,
    /// Address text the user confirmed
    pub address_text: String,
    /// Geocoder-formatted address, when available
    pub formatted_address: Option<String>,
    /// Place id from the geocoding provider, when available
    pub place_id: Option<String>,
    /// Delivery zone resolved at save time
    pub zone_id: Option<String>,
    /// Town resolved at save time
    pub town_id: Option<String>,
    /// How the location was captured
    pub location_type: LocationType,
    /// Whether this location should become the user's primary
    pub is_primary: bool,
}

impl NewUserLocation {
    /// Creates a non-primary location with no resolved zone.
    pub fn new(
        user_id: impl Into<String>,
        coordinates: Coordinate,
        address_text: impl Into<String>,
        location_type: LocationType,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            coordinates,
            address_text: address_text.into(),
            formatted_address: None,
            place_id: None,
            zone_id: None,
            town_id: None,
            location_type,
            is_primary: false,
        }
    }

    /// Builder-style method to attach the resolved zone and town.
    #[must_use]
    pub fn with_zone(mut self, zone_id: impl Into<String>, town_id: impl Into<String>) -> Self {
        self.zone_id = Some(zone_id.into());
        self.town_id = Some(town_id.into());
        self
    }

    /// Builder-style method to set the geocoder-formatted address.
    #[must_use]
    pub fn with_formatted_address(mut self, address: impl Into<String>) -> Self {
        self.formatted_address = Some(address.into());
        self
    }

    /// Builder-style method to set the geocoding place id.
    #[must_use]
    pub fn with_place_id(mut self, place_id: impl Into<String>) -> Self {
        self.place_id = Some(place_id.into());
        self
    }

    /// Builder-style method to set the primary flag.
    #[must_use]
    pub fn with_primary(mut self, primary: bool) -> Self {
        self.is_primary = primary;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_type_round_trip() {
        for kind in [LocationType::Gps, LocationType::Manual, LocationType::Search] {
            assert_eq!(kind.as_str().parse::<LocationType>().unwrap(), kind);
        }
        assert!("teleport".parse::<LocationType>().is_err());
    }

    #[test]
    fn test_new_location_builder() {
        let location = NewUserLocation::new(
            "u1",
            Coordinate::new(25.514, 90.207),
            "Main Bazaar, Tura",
            LocationType::Search,
        )
        .with_zone("tura-z1", "tura")
        .with_place_id("ChIJxyz")
        .with_primary(true);

        assert_eq!(location.zone_id.as_deref(), Some("tura-z1"));
        assert_eq!(location.town_id.as_deref(), Some("tura"));
        assert!(location.is_primary);
        assert!(location.formatted_address.is_none());
    }
}
