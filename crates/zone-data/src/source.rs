//! The data source contract shared by remote and offline providers.

use crate::error::DataResult;
use dayliz_zones::{Town, Zone};

/// Supplies the candidate town and zone sets for detection.
///
/// Implementations must behave identically from the caller's perspective:
/// list operations return active entries only, by-id lookups resolve inactive
/// entries too (so an admin screen can still open them), and every zone
/// returned has already passed its shape validation.
#[allow(async_fn_in_trait)]
pub trait ZoneDataSource {
    /// All active towns.
    async fn active_towns(&self) -> DataResult<Vec<Town>>;

    /// A town by id; [`crate::DataError::NotFound`] when absent.
    async fn town_by_id(&self, id: &str) -> DataResult<Town>;

    /// A town's active zones.
    async fn zones_for_town(&self, town_id: &str) -> DataResult<Vec<Zone>>;

    /// All active zones across towns — the detection engine's candidate set.
    async fn all_active_zones(&self) -> DataResult<Vec<Zone>>;

    /// A zone by id; [`crate::DataError::NotFound`] when absent.
    async fn zone_by_id(&self, id: &str) -> DataResult<Zone>;
}
