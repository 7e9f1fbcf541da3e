//! Error types for zone construction and loading.

use thiserror::Error;

/// Result type alias for zone operations.
pub type Result<T> = std::result::Result<T, ZoneError>;

/// Errors raised when a zone fails its shape invariant.
///
/// These are surfaced at construction/load time; a zone that fails validation
/// is excluded from the active set and never reaches the detection engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ZoneError {
    /// Polygon boundary has fewer than 3 points
    #[error("polygon boundary needs at least 3 points, got {count}")]
    BoundaryTooSmall {
        /// Number of points the boundary actually had
        count: usize,
    },

    /// A coordinate is outside the valid lat/lng ranges
    #[error("invalid coordinate: ({latitude}, {longitude})")]
    InvalidCoordinate {
        /// Offending latitude
        latitude: f64,
        /// Offending longitude
        longitude: f64,
    },

    /// Circle radius is negative or not finite
    #[error("invalid circle radius: {radius_km} km")]
    InvalidRadius {
        /// Offending radius
        radius_km: f64,
    },

    /// Polygon row carried no boundary data
    #[error("polygon zone is missing boundary coordinates")]
    MissingBoundary,

    /// A stored boundary point could not be parsed
    #[error("boundary point {index} could not be parsed")]
    InvalidBoundaryPoint {
        /// Index of the unparsable point within the stored boundary
        index: usize,
    },

    /// Circle row is missing one of its required fields
    #[error("circle zone is missing field `{field}`")]
    MissingCircleField {
        /// Name of the missing column
        field: &'static str,
    },

    /// Stored shape type is neither `polygon` nor `circle`
    #[error("unknown zone shape type: {0}")]
    UnknownShapeType(String),
}
