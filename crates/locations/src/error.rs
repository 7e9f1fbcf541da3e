//! Error types for location record management.

use dayliz_api_client::ApiError;
use thiserror::Error;

/// Result type alias for location operations.
pub type LocationResult<T> = Result<T, LocationError>;

/// Location record errors.
#[derive(Debug, Error)]
pub enum LocationError {
    /// The requested location record does not exist
    #[error("location not found: {id}")]
    NotFound {
        /// The id that was looked up
        id: String,
    },

    /// The location exists but belongs to a different user
    #[error("location {location_id} does not belong to user {user_id}")]
    NotOwned {
        /// The location whose ownership was checked
        location_id: String,
        /// The user who attempted the operation
        user_id: String,
    },

    /// The backing store failed (network or server)
    #[error("location store error: {0}")]
    Source(#[from] ApiError),

    /// Shared in-memory state was poisoned by a panicking writer
    #[error("internal state poisoned: {0}")]
    Poisoned(String),
}

impl LocationError {
    /// Create a not-found error
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    /// True for missing-id failures
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LocationError::NotOwned {
            location_id: "loc-1".into(),
            user_id: "u2".into(),
        };
        assert_eq!(err.to_string(), "location loc-1 does not belong to user u2");
        assert!(!err.is_not_found());
        assert!(LocationError::not_found("loc-9").is_not_found());
    }
}
