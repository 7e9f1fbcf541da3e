//! In-memory location store.
//!
//! The offline/test twin of [`crate::SupabaseLocationStore`]: a
//! `RwLock`-guarded vector that assigns ids and timestamps the way the
//! backend would. Records stay in insertion order, which is what gives
//! `list_for_user` its creation ordering.

use crate::error::{LocationError, LocationResult};
use crate::record::{NewUserLocation, UserLocationRecord};
use crate::store::LocationStore;
use chrono::Utc;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

/// Location store holding records in process memory.
#[derive(Clone, Default)]
pub struct InMemoryLocationStore {
    records: Arc<RwLock<Vec<UserLocationRecord>>>,
}

impl InMemoryLocationStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read_guard(&self) -> LocationResult<std::sync::RwLockReadGuard<'_, Vec<UserLocationRecord>>> {
        self.records
            .read()
            .map_err(|e| LocationError::Poisoned(e.to_string()))
    }

    fn write_guard(
        &self,
    ) -> LocationResult<std::sync::RwLockWriteGuard<'_, Vec<UserLocationRecord>>> {
        self.records
            .write()
            .map_err(|e| LocationError::Poisoned(e.to_string()))
    }
}

impl LocationStore for InMemoryLocationStore {
    async fn insert(&self, location: NewUserLocation) -> LocationResult<UserLocationRecord> {
        let record = UserLocationRecord {
            id: Uuid::new_v4().to_string(),
            user_id: location.user_id,
            coordinates: location.coordinates,
            address_text: location.address_text,
            formatted_address: location.formatted_address,
            place_id: location.place_id,
            zone_id: location.zone_id,
            town_id: location.town_id,
            location_type: location.location_type,
            is_primary: location.is_primary,
            created_at: Utc::now(),
        };

        self.write_guard()?.push(record.clone());
        Ok(record)
    }

    async fn list_for_user(&self, user_id: &str) -> LocationResult<Vec<UserLocationRecord>> {
        Ok(self
            .read_guard()?
            .iter()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn get(&self, location_id: &str) -> LocationResult<Option<UserLocationRecord>> {
        Ok(self
            .read_guard()?
            .iter()
            .find(|r| r.id == location_id)
            .cloned())
    }

    async fn clear_primary(&self, user_id: &str) -> LocationResult<()> {
        for record in self
            .write_guard()?
            .iter_mut()
            .filter(|r| r.user_id == user_id)
        {
            record.is_primary = false;
        }
        Ok(())
    }

    async fn set_primary(&self, location_id: &str) -> LocationResult<()> {
        let mut records = self.write_guard()?;
        let record = records
            .iter_mut()
            .find(|r| r.id == location_id)
            .ok_or_else(|| LocationError::not_found(location_id))?;
        record.is_primary = true;
        Ok(())
    }

    async fn delete(&self, location_id: &str) -> LocationResult<()> {
        self.write_guard()?.retain(|r| r.id != location_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::LocationType;
    use dayliz_geo::Coordinate;

    fn sample(user_id: &str) -> NewUserLocation {
        NewUserLocation::new(
            user_id,
            Coordinate::new(25.514, 90.207),
            "Main Bazaar, Tura",
            LocationType::Manual,
        )
    }

    #[tokio::test]
    async fn test_insert_assigns_id_and_timestamp() {
        let store = InMemoryLocationStore::new();
        let record = store.insert(sample("u1")).await.unwrap();
        assert!(!record.id.is_empty());
        assert_eq!(store.get(&record.id).await.unwrap(), Some(record));
    }

    #[tokio::test]
    async fn test_list_is_scoped_to_user() {
        let store = InMemoryLocationStore::new();
        store.insert(sample("u1")).await.unwrap();
        store.insert(sample("u2")).await.unwrap();

        let u1 = store.list_for_user("u1").await.unwrap();
        assert_eq!(u1.len(), 1);
        assert_eq!(u1[0].user_id, "u1");
    }

    #[tokio::test]
    async fn test_set_primary_unknown_id_fails() {
        let store = InMemoryLocationStore::new();
        let err = store.set_primary("missing").await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let store = InMemoryLocationStore::new();
        let clone = store.clone();
        store.insert(sample("u1")).await.unwrap();
        assert_eq!(clone.list_for_user("u1").await.unwrap().len(), 1);
    }
}
