//! Location persistence contract and the manager that enforces its rules.

use crate::error::{LocationError, LocationResult};
use crate::record::{NewUserLocation, UserLocationRecord};

/// Minimal persistence contract for user location records.
///
/// Implementations are dumb row stores; the invariants (exclusive primary
/// flag, ownership checks) live in [`LocationManager`], which sequences these
/// operations.
#[allow(async_fn_in_trait)]
pub trait LocationStore {
    /// Inserts a new record and returns it with id and timestamp assigned.
    async fn insert(&self, location: NewUserLocation) -> LocationResult<UserLocationRecord>;

    /// All records of a user in creation order.
    async fn list_for_user(&self, user_id: &str) -> LocationResult<Vec<UserLocationRecord>>;

    /// A record by id, `None` when absent.
    async fn get(&self, location_id: &str) -> LocationResult<Option<UserLocationRecord>>;

    /// Clears the primary flag on all of a user's records.
    async fn clear_primary(&self, user_id: &str) -> LocationResult<()>;

    /// Marks one record as primary.
    async fn set_primary(&self, location_id: &str) -> LocationResult<()>;

    /// Deletes a record; unknown ids succeed silently.
    async fn delete(&self, location_id: &str) -> LocationResult<()>;
}

/// User location record manager.
///
/// Wraps a [`LocationStore`] and upholds the per-user invariant that at most
/// one record is primary at any time.
#[derive(Clone)]
pub struct LocationManager<S: LocationStore> {
    store: S,
}

impl<S: LocationStore> LocationManager<S> {
    /// Creates a manager over a store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Saves a confirmed location.
    ///
    /// When the new location is marked primary, every other record of the
    /// user loses the flag first, so the store never holds two primaries.
    ///
    /// # Errors
    /// Propagates store failures as [`LocationError::Source`].
    pub async fn save_user_location(
        &self,
        location: NewUserLocation,
    ) -> LocationResult<UserLocationRecord> {
        if location.is_primary {
            self.store.clear_primary(&location.user_id).await?;
        }
        self.store.insert(location).await
    }

    /// All saved locations of a user, in creation order.
    ///
    /// # Errors
    /// Propagates store failures as [`LocationError::Source`].
    pub async fn get_user_locations(
        &self,
        user_id: &str,
    ) -> LocationResult<Vec<UserLocationRecord>> {
        self.store.list_for_user(user_id).await
    }

    /// Re-homes the user's primary flag onto an existing record.
    ///
    /// # Errors
    /// [`LocationError::NotFound`] when the record does not exist and
    /// [`LocationError::NotOwned`] when it belongs to another user.
    pub async fn update_primary_location(
        &self,
        user_id: &str,
        location_id: &str,
    ) -> LocationResult<()> {
        let record = self
            .store
            .get(location_id)
            .await?
            .ok_or_else(|| LocationError::not_found(location_id))?;

        if record.user_id != user_id {
            return Err(LocationError::NotOwned {
                location_id: location_id.to_string(),
                user_id: user_id.to_string(),
            });
        }

        self.store.clear_primary(user_id).await?;
        self.store.set_primary(location_id).await
    }

    /// Deletes a saved location. Deleting an unknown id is a no-op.
    ///
    /// # Errors
    /// Propagates store failures as [`LocationError::Source`].
    pub async fn delete_user_location(&self, location_id: &str) -> LocationResult<()> {
        self.store.delete(location_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::InMemoryLocationStore;
    use crate::record::LocationType;
    use dayliz_geo::Coordinate;

    fn manager() -> LocationManager<InMemoryLocationStore> {
        LocationManager::new(InMemoryLocationStore::new())
    }

    fn tura_location(user_id: &str) -> NewUserLocation {
        NewUserLocation::new(
            user_id,
            Coordinate::new(25.514, 90.207),
            "Main Bazaar, Tura",
            LocationType::Gps,
        )
        .with_zone("tura-z1", "tura")
    }

    fn guwahati_location(user_id: &str) -> NewUserLocation {
        NewUserLocation::new(
            user_id,
            Coordinate::new(26.1445, 91.7362),
            "GS Road, Guwahati",
            LocationType::Search,
        )
        .with_zone("guwahati-z1", "guwahati")
    }

    #[tokio::test]
    async fn test_save_and_list() {
        let manager = manager();
        manager.save_user_location(tura_location("u1")).await.unwrap();
        manager.save_user_location(guwahati_location("u1")).await.unwrap();

        let locations = manager.get_user_locations("u1").await.unwrap();
        assert_eq!(locations.len(), 2);
        // Creation order is preserved
        assert_eq!(locations[0].address_text, "Main Bazaar, Tura");
    }

    #[tokio::test]
    async fn test_second_primary_save_demotes_first() {
        let manager = manager();
        let first = manager
            .save_user_location(tura_location("u1").with_primary(true))
            .await
            .unwrap();
        let second = manager
            .save_user_location(guwahati_location("u1").with_primary(true))
            .await
            .unwrap();

        let locations = manager.get_user_locations("u1").await.unwrap();
        let primaries: Vec<_> = locations.iter().filter(|l| l.is_primary).collect();
        assert_eq!(primaries.len(), 1);
        assert_eq!(primaries[0].id, second.id);
        assert!(locations.iter().any(|l| l.id == first.id && !l.is_primary));
    }

    #[tokio::test]
    async fn test_primary_flag_is_per_user() {
        let manager = manager();
        manager
            .save_user_location(tura_location("u1").with_primary(true))
            .await
            .unwrap();
        manager
            .save_user_location(guwahati_location("u2").with_primary(true))
            .await
            .unwrap();

        for user in ["u1", "u2"] {
            let locations = manager.get_user_locations(user).await.unwrap();
            assert_eq!(locations.iter().filter(|l| l.is_primary).count(), 1);
        }
    }

    #[tokio::test]
    async fn test_update_primary_location() {
        let manager = manager();
        let first = manager
            .save_user_location(tura_location("u1").with_primary(true))
            .await
            .unwrap();
        let second = manager.save_user_location(guwahati_location("u1")).await.unwrap();

        manager.update_primary_location("u1", &second.id).await.unwrap();

        let locations = manager.get_user_locations("u1").await.unwrap();
        assert!(locations.iter().any(|l| l.id == second.id && l.is_primary));
        assert!(locations.iter().any(|l| l.id == first.id && !l.is_primary));
    }

    #[tokio::test]
    async fn test_update_primary_rejects_foreign_record() {
        let manager = manager();
        let foreign = manager.save_user_location(tura_location("u2")).await.unwrap();

        let err = manager
            .update_primary_location("u1", &foreign.id)
            .await
            .unwrap_err();
        assert!(matches!(err, LocationError::NotOwned { .. }));
    }

    #[tokio::test]
    async fn test_update_primary_unknown_id_is_not_found() {
        let manager = manager();
        let err = manager
            .update_primary_location("u1", "missing")
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_delete_is_noop_for_unknown_id() {
        let manager = manager();
        let record = manager.save_user_location(tura_location("u1")).await.unwrap();

        manager.delete_user_location(&record.id).await.unwrap();
        // Second delete of the same id succeeds silently
        manager.delete_user_location(&record.id).await.unwrap();

        assert!(manager.get_user_locations("u1").await.unwrap().is_empty());
    }
}
