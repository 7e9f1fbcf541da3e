//! Error types for the data provider.

use dayliz_api_client::ApiError;
use thiserror::Error;

/// Result type alias for data provider operations.
pub type DataResult<T> = Result<T, DataError>;

/// Data provider errors.
///
/// Not-found and source failures are deliberately distinct kinds so callers
/// can retry or degrade to the offline dataset on the latter without
/// mistaking a missing id for an outage.
#[derive(Debug, Error)]
pub enum DataError {
    /// The requested town/zone does not exist
    #[error("{entity} not found: {id}")]
    NotFound {
        /// Entity kind, e.g. "town" or "zone"
        entity: &'static str,
        /// The id that was looked up
        id: String,
    },

    /// The remote source failed (network or server)
    #[error("data source error: {0}")]
    Source(#[from] ApiError),
}

impl DataError {
    /// Create a not-found error
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound { entity, id: id.into() }
    }

    /// True for missing-id failures
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// True when the underlying failure is worth retrying at the caller
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::NotFound { .. } => false,
            Self::Source(e) => e.is_retryable(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_classification() {
        let err = DataError::not_found("town", "tura");
        assert!(err.is_not_found());
        assert!(!err.is_retryable());
        assert_eq!(err.to_string(), "town not found: tura");
    }

    #[test]
    fn test_source_retryable_delegates() {
        let err = DataError::from(ApiError::api_response(503, "unavailable"));
        assert!(!err.is_not_found());
        assert!(err.is_retryable());
    }
}
