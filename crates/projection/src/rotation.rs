//! Planar rotation about an arbitrary center.
//!
//! Note the handedness: [`rotate_point`] treats a positive angle as a
//! clockwise turn, while the local-frame conversions in [`crate::local`]
//! treat a positive angle as counter-clockwise. Both conventions are in use
//! by callers and are kept separate.

use frame_common::{deg_to_rad, normalize_degrees, rad_to_deg, LocalPoint};
use nalgebra::{Rotation2, Vector2};

/// Rotate `point` about `center` by `angle_deg` degrees, clockwise positive.
pub fn rotate_point(center: LocalPoint, point: LocalPoint, angle_deg: f64) -> LocalPoint {
    let rotation = Rotation2::new(-deg_to_rad(angle_deg));
    let rel = Vector2::new(point.x - center.x, point.y - center.y);
    let turned = rotation * rel;
    LocalPoint::new(turned.x + center.x, turned.y + center.y)
}

/// Bearing from `center` to `point` in degrees, counter-clockwise from the
/// positive x-axis, in `[0, 360)`.
///
/// Coincident points give 0.
pub fn angle_between_points(center: LocalPoint, point: LocalPoint) -> f64 {
    let theta = (point.y - center.y).atan2(point.x - center.x);
    normalize_degrees(rad_to_deg(theta))
}
