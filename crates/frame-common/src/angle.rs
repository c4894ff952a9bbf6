//! Angle conversions shared by the projection routines.
//!
//! Angles are carried in degrees at every public boundary. Only
//! [`normalize_degrees`] folds them into `[0, 360)`; everything else
//! leaves them unnormalized.

use std::f64::consts::PI;

use crate::error::{FrameError, FrameResult};

/// Convert degrees to radians.
#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Convert radians to degrees.
#[inline]
pub fn rad_to_deg(rad: f64) -> f64 {
    rad * 180.0 / PI
}

/// Fold an angle in degrees into `[0, 360)`.
pub fn normalize_degrees(deg: f64) -> f64 {
    let wrapped = deg.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Reject a non-finite rotation angle.
pub fn validate_angle(deg: f64) -> FrameResult<()> {
    FrameError::check_finite("angle", deg).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::assert_approx_eq;

    #[test]
    fn test_deg_rad_conversion() {
        assert_approx_eq!(deg_to_rad(180.0), PI, 1e-15);
        assert_approx_eq!(rad_to_deg(PI / 2.0), 90.0, 1e-12);
        assert_approx_eq!(rad_to_deg(deg_to_rad(-37.25)), -37.25, 1e-12);
    }

    #[test]
    fn test_normalize_degrees() {
        assert_eq!(normalize_degrees(0.0), 0.0);
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert_eq!(normalize_degrees(-90.0), 270.0);
        assert_eq!(normalize_degrees(725.0), 5.0);
        assert!(normalize_degrees(-1e-20) < 360.0);
    }

    #[test]
    fn test_validate_angle() {
        assert!(validate_angle(-720.0).is_ok());
        assert!(validate_angle(f64::INFINITY).is_err());
    }
}
