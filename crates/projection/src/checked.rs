//! Validating wrappers around the local-frame conversions.
//!
//! The plain functions pass any input straight through the formulas. These
//! variants reject non-finite values, out-of-range coordinates and polar
//! anchors before delegating.

use frame_common::{deg_to_rad, validate_angle, FrameError, FrameResult, GeoPoint, LocalPoint};
use tracing::debug;

use crate::local::{geo_to_local_xy, local_xy_to_geo};

/// Anchors whose `cos(lat)` falls below this are treated as polar.
pub const POLAR_COS_EPSILON: f64 = 1e-12;

/// Checked [`geo_to_local_xy`].
pub fn try_geo_to_local_xy(
    p1: GeoPoint,
    p2: GeoPoint,
    offset: LocalPoint,
    angle_deg: f64,
) -> FrameResult<LocalPoint> {
    validate_inputs(&[p1, p2], &[offset], angle_deg)?;
    Ok(geo_to_local_xy(p1, p2, offset, angle_deg))
}

/// Checked [`local_xy_to_geo`]. Fails with [`FrameError::PolarSingularity`]
/// when the anchor sits on a pole.
pub fn try_local_xy_to_geo(
    p1: GeoPoint,
    offset1: LocalPoint,
    offset2: LocalPoint,
    angle_deg: f64,
) -> FrameResult<GeoPoint> {
    validate_inputs(&[p1], &[offset1, offset2], angle_deg)?;

    if deg_to_rad(p1.lat).cos().abs() < POLAR_COS_EPSILON {
        debug!(lat = p1.lat, "Rejecting polar anchor");
        return Err(FrameError::PolarSingularity(p1.lat));
    }

    Ok(local_xy_to_geo(p1, offset1, offset2, angle_deg))
}

fn validate_inputs(geo: &[GeoPoint], local: &[LocalPoint], angle_deg: f64) -> FrameResult<()> {
    let result = geo
        .iter()
        .try_for_each(GeoPoint::validate)
        .and_then(|_| local.iter().try_for_each(LocalPoint::validate))
        .and_then(|_| validate_angle(angle_deg));

    if let Err(ref e) = result {
        debug!(error = %e, "Input validation failed");
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_matches_unchecked() {
        let p1 = GeoPoint::new(52.0, 5.0);
        let p2 = GeoPoint::new(52.003, 5.004);
        let offset = LocalPoint::new(10.0, 20.0);
        let checked = try_geo_to_local_xy(p1, p2, offset, 15.0).unwrap();
        assert_eq!(checked, geo_to_local_xy(p1, p2, offset, 15.0));
    }

    #[test]
    fn test_rejects_bad_latitude() {
        let result = try_geo_to_local_xy(
            GeoPoint::new(95.0, 0.0),
            GeoPoint::new(0.0, 0.0),
            LocalPoint::ORIGIN,
            0.0,
        );
        assert!(matches!(result, Err(FrameError::LatitudeOutOfRange(_))));
    }

    #[test]
    fn test_rejects_nan_angle() {
        let result = try_local_xy_to_geo(
            GeoPoint::new(0.0, 0.0),
            LocalPoint::ORIGIN,
            LocalPoint::ORIGIN,
            f64::NAN,
        );
        assert!(matches!(result, Err(FrameError::NonFinite { field: "angle", .. })));
    }

    #[test]
    fn test_rejects_polar_anchor() {
        for lat in [90.0, -90.0] {
            let result = try_local_xy_to_geo(
                GeoPoint::new(lat, 0.0),
                LocalPoint::ORIGIN,
                LocalPoint::new(1.0, 1.0),
                0.0,
            );
            assert!(matches!(result, Err(FrameError::PolarSingularity(l)) if l == lat));
        }
    }
}
