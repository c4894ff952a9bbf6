//! Error types for local-frame conversions.

use thiserror::Error;

use crate::point::PointParseError;

/// Result type alias using FrameError.
pub type FrameResult<T> = Result<T, FrameError>;

/// Primary error type for checked coordinate operations.
#[derive(Debug, Error)]
pub enum FrameError {
    // === Input Errors ===
    #[error("Non-finite value for '{field}': {value}")]
    NonFinite { field: &'static str, value: f64 },

    #[error("Latitude out of range [-90, 90]: {0}")]
    LatitudeOutOfRange(f64),

    #[error("Longitude out of range [-180, 180]: {0}")]
    LongitudeOutOfRange(f64),

    #[error("Anchor latitude {0} is too close to a pole for the local frame")]
    PolarSingularity(f64),

    #[error(transparent)]
    InvalidPoint(#[from] PointParseError),

    // === Configuration Errors ===
    #[error("Configuration error: {0}")]
    Config(String),
}

impl FrameError {
    /// Whether the error was caused by a caller-supplied coordinate value.
    pub fn is_input_error(&self) -> bool {
        !matches!(self, FrameError::Config(_))
    }

    /// Reject a non-finite value for the named field.
    pub fn check_finite(field: &'static str, value: f64) -> FrameResult<f64> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(FrameError::NonFinite { field, value })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_finite() {
        assert_eq!(FrameError::check_finite("x", 1.5).unwrap(), 1.5);
        assert!(matches!(
            FrameError::check_finite("x", f64::NAN),
            Err(FrameError::NonFinite { field: "x", .. })
        ));
        assert!(FrameError::check_finite("y", f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_error_classification() {
        assert!(FrameError::LatitudeOutOfRange(91.0).is_input_error());
        assert!(FrameError::PolarSingularity(90.0).is_input_error());
        assert!(!FrameError::Config("missing anchor".into()).is_input_error());
    }

    #[test]
    fn test_error_messages() {
        let err = FrameError::LongitudeOutOfRange(200.0);
        assert_eq!(err.to_string(), "Longitude out of range [-180, 180]: 200");

        let err = FrameError::from(PointParseError::InvalidFormat("1;2".into()));
        assert!(err.to_string().contains("1;2"));
    }
}
