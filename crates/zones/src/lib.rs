//! Delivery-zone and town models plus the zone detection engine.
//!
//! A [`Zone`] is a bounded geographic area (polygon or circle) within which
//! delivery is offered; a [`Town`] is the administrative grouping that owns
//! zones and supplies default delivery settings. [`detect_zone`] answers the
//! core product question: given a coordinate, which zone (if any) covers it,
//! and if none does, which zone is nearest.
//!
//! # Example
//!
//! ```
//! use dayliz_geo::Coordinate;
//! use dayliz_zones::{detect_zone, Zone, ZoneDetectionResult, ZoneShape};
//!
//! let shape = ZoneShape::polygon(vec![
//!     Coordinate::new(25.513, 90.206),
//!     Coordinate::new(25.513, 90.208),
//!     Coordinate::new(25.515, 90.208),
//!     Coordinate::new(25.515, 90.206),
//! ]).unwrap();
//! let zones = vec![Zone::new("z1", "Main Bazaar", "tura", 1, shape)];
//!
//! match detect_zone(&Coordinate::new(25.514, 90.207), &zones) {
//!     ZoneDetectionResult::Inside { zone, .. } => assert_eq!(zone.id, "z1"),
//!     ZoneDetectionResult::Outside { .. } => unreachable!(),
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod detection;
mod error;
mod town;
mod zone;

pub use detection::{
    detect_zone, find_closest_zone, is_delivery_available, rank_zones_by_distance,
    ZoneDetectionResult,
};
pub use error::{Result, ZoneError};
pub use town::Town;
pub use zone::{Zone, ZoneShape};
