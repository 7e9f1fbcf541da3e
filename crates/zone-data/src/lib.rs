//! Zone/town data provider for Dayliz.
//!
//! Supplies the candidate zone and town sets that the detection engine runs
//! over, from two interchangeable sources behind one trait:
//!
//! - [`RemoteZoneSource`] fetches rows from the Supabase backend and converts
//!   them into validated models, discarding malformed zones with a logged
//!   warning.
//! - [`StaticZoneSource`] serves a bundled dataset for offline operation and
//!   tests.
//!
//! Which source is active is a composition-root decision; remote failures are
//! surfaced as [`DataError::Source`], never silently downgraded to the
//! fallback.
//!
//! # Example
//!
//! ```rust,no_run
//! use dayliz_zone_data::{StaticZoneSource, ZoneDataSource};
//!
//! #[tokio::main]
//! async fn main() {
//!     let source = StaticZoneSource::bundled();
//!     let zones = source.all_active_zones().await.unwrap();
//!     assert!(!zones.is_empty());
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod convert;
mod error;
mod offline;
mod remote;
mod source;

pub use error::{DataError, DataResult};
pub use offline::StaticZoneSource;
pub use remote::RemoteZoneSource;
pub use source::ZoneDataSource;
