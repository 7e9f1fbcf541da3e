//! Offline fallback zone/town source.
//!
//! A small bundled dataset of known towns and zones, used when the backend is
//! unreachable or before a town has real data. The same [`ZoneDataSource`]
//! contract as the remote source, so callers cannot tell which served them.

use crate::error::{DataError, DataResult};
use crate::source::ZoneDataSource;
use dayliz_geo::Coordinate;
use dayliz_zones::{Town, Zone, ZoneShape};
use once_cell::sync::Lazy;

static BUNDLED_TOWNS: Lazy<Vec<Town>> = Lazy::new(|| {
    vec![
        Town::new("tura", "Tura", "Meghalaya")
            .with_delivery_fee(20.0)
            .with_min_order_amount(99.0)
            .with_estimated_delivery_time("30-45 mins"),
        Town::new("guwahati", "Guwahati", "Assam")
            .with_delivery_fee(30.0)
            .with_min_order_amount(149.0)
            .with_estimated_delivery_time("20-30 mins"),
    ]
});

static BUNDLED_ZONES: Lazy<Vec<Zone>> = Lazy::new(|| {
    // A panic here means the bundled dataset itself is malformed.
    let main_bazaar = ZoneShape::polygon(vec![
        Coordinate::new(25.513, 90.206),
        Coordinate::new(25.513, 90.208),
        Coordinate::new(25.515, 90.208),
        Coordinate::new(25.515, 90.206),
    ])
    .expect("bundled Main Bazaar boundary is valid");

    let chandmari = ZoneShape::polygon(vec![
        Coordinate::new(25.515, 90.214),
        Coordinate::new(25.515, 90.220),
        Coordinate::new(25.520, 90.220),
        Coordinate::new(25.520, 90.214),
    ])
    .expect("bundled Chandmari boundary is valid");

    let guwahati_central = ZoneShape::circle(Coordinate::new(26.1445, 91.7362), 5.0)
        .expect("bundled Guwahati Central circle is valid");

    let dispur = ZoneShape::circle(Coordinate::new(26.1350, 91.7898), 3.0)
        .expect("bundled Dispur circle is valid");

    vec![
        Zone::new("tura-z1", "Main Bazaar", "tura", 1, main_bazaar)
            .with_delivery_fee(20.0)
            .with_min_order_amount(99.0)
            .with_estimated_delivery_time("25-35 mins"),
        Zone::new("tura-z2", "Chandmari", "tura", 2, chandmari)
            .with_delivery_fee(25.0)
            .with_min_order_amount(99.0)
            .with_estimated_delivery_time("30-45 mins"),
        Zone::new("guwahati-z1", "Guwahati Central", "guwahati", 1, guwahati_central)
            .with_delivery_fee(30.0)
            .with_min_order_amount(149.0)
            .with_estimated_delivery_time("20-30 mins"),
        Zone::new("guwahati-z2", "Dispur", "guwahati", 2, dispur)
            .with_delivery_fee(30.0)
            .with_min_order_amount(149.0)
            .with_estimated_delivery_time("25-35 mins"),
    ]
});

/// Zone/town provider serving a fixed in-memory dataset.
#[derive(Clone)]
pub struct StaticZoneSource {
    towns: Vec<Town>,
    zones: Vec<Zone>,
}

impl StaticZoneSource {
    /// The bundled Dayliz launch dataset (Tura and Guwahati).
    #[must_use]
    pub fn bundled() -> Self {
        Self {
            towns: BUNDLED_TOWNS.clone(),
            zones: BUNDLED_ZONES.clone(),
        }
    }

    /// A source over caller-supplied data, mainly for tests and previews.
    #[must_use]
    pub fn with_data(towns: Vec<Town>, zones: Vec<Zone>) -> Self {
        Self { towns, zones }
    }
}

impl ZoneDataSource for StaticZoneSource {
    async fn active_towns(&self) -> DataResult<Vec<Town>> {
        Ok(self.towns.iter().filter(|t| t.is_active).cloned().collect())
    }

    async fn town_by_id(&self, id: &str) -> DataResult<Town> {
        self.towns
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or_else(|| DataError::not_found("town", id))
    }

    async fn zones_for_town(&self, town_id: &str) -> DataResult<Vec<Zone>> {
        Ok(self
            .zones
            .iter()
            .filter(|z| z.town_id == town_id && z.is_active)
            .cloned()
            .collect())
    }

    async fn all_active_zones(&self) -> DataResult<Vec<Zone>> {
        Ok(self.zones.iter().filter(|z| z.is_active).cloned().collect())
    }

    async fn zone_by_id(&self, id: &str) -> DataResult<Zone> {
        self.zones
            .iter()
            .find(|z| z.id == id)
            .cloned()
            .ok_or_else(|| DataError::not_found("zone", id))
    }
}
