//! Typed endpoint interfaces over the PostgREST tables.
//!
//! Each module exposes the raw storage rows for one table plus the queries the
//! delivery-zone core needs. Conversion from rows to domain models (and the
//! validation that goes with it) lives in `dayliz-zone-data`, not here.

mod locations;
mod towns;
mod zones;

pub use locations::{LocationsApi, NewUserLocationRow, UserLocationRow};
pub use towns::{TownRow, TownsApi};
pub use zones::{ZoneRow, ZonesApi};
