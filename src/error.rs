use thiserror::Error;

/// Row-level validation failures raised by the coordinate fuzzer.
///
/// Every variant is recoverable: the line transformer logs the failure,
/// passes the offending line through unmodified, and keeps going.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FuzzError {
    /// A coordinate field did not parse to a finite number.
    #[error("latitude and longitude must be numeric values (latitude={latitude:?}, longitude={longitude:?})")]
    NonNumeric { latitude: String, longitude: String },

    #[error("latitude must be between -90 and 90, got {0}")]
    LatitudeOutOfRange(f64),

    #[error("longitude must be between -180 and 180, got {0}")]
    LongitudeOutOfRange(f64),

    #[error("radius must be greater than 0, got {0}")]
    NonPositiveRadius(f64),
}
