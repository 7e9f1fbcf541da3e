//! User location records for Dayliz.
//!
//! When a user confirms a delivery location the app persists it here along
//! with the zone/town that detection resolved. [`LocationManager`] layers the
//! business rules — exclusive primary flag, ownership checks — over a
//! [`LocationStore`] backend (Supabase in production, in-memory for tests and
//! offline use). [`LocationSetupSession`] carries the once-per-process setup
//! flag that keeps the app from re-prompting within one run.
//!
//! # Example
//!
//! ```rust,no_run
//! use dayliz_geo::Coordinate;
//! use dayliz_locations::{
//!     InMemoryLocationStore, LocationManager, LocationType, NewUserLocation,
//! };
//!
//! #[tokio::main]
//! async fn main() {
//!     let manager = LocationManager::new(InMemoryLocationStore::new());
//!
//!     let record = manager
//!         .save_user_location(
//!             NewUserLocation::new(
//!                 "u1",
//!                 Coordinate::new(25.514, 90.207),
//!                 "Main Bazaar, Tura",
//!                 LocationType::Gps,
//!             )
//!             .with_zone("tura-z1", "tura")
//!             .with_primary(true),
//!         )
//!         .await
//!         .unwrap();
//!
//!     assert!(record.is_primary);
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod error;
mod memory;
mod record;
mod remote;
mod session;
mod store;

pub use error::{LocationError, LocationResult};
pub use memory::InMemoryLocationStore;
pub use record::{LocationType, NewUserLocation, UserLocationRecord};
pub use remote::SupabaseLocationStore;
pub use session::LocationSetupSession;
pub use store::{LocationManager, LocationStore};
