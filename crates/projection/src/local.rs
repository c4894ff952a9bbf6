//! Local tangent-plane conversions between geographic and planar coordinates.
//!
//! A local frame is anchored at a geographic point `p1` that sits at some
//! planar offset (meters) and is rotated by an angle in degrees, positive
//! counter-clockwise. The forward conversion scales degrees to kilometers
//! with a truncated Fourier fit of meridian and parallel arc length. The
//! inverse uses a plain spherical earth (equirectangular), so the two are
//! only approximate inverses of each other, with the mismatch growing away
//! from the equator.

use frame_common::{deg_to_rad, rad_to_deg, GeoPoint, LocalPoint};
use nalgebra::{Rotation2, Vector2};

/// Mean earth radius used by the inverse conversion (kilometers).
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Meters in one kilometer.
pub const METERS_PER_KM: f64 = 1000.0;

// Kilometers per degree of latitude: K1_0 - K1_2*cos(2φ) + K1_4*cos(4φ)
pub const K1_0: f64 = 111.13209;
pub const K1_2: f64 = 0.56605;
pub const K1_4: f64 = 0.00120;

// Kilometers per degree of longitude: K2_1*cos(φ) - K2_3*cos(3φ) + K2_5*cos(5φ)
pub const K2_1: f64 = 111.41513;
pub const K2_3: f64 = 0.09455;
pub const K2_5: f64 = 0.00012;

/// Length of one degree of latitude and longitude in kilometers at the
/// given latitude (radians).
///
/// Returns `(km_per_deg_lat, km_per_deg_lng)`.
#[inline]
pub fn degree_lengths_km(lat_rad: f64) -> (f64, f64) {
    let k1 = K1_0 - K1_2 * (2.0 * lat_rad).cos() + K1_4 * (4.0 * lat_rad).cos();
    let k2 = K2_1 * lat_rad.cos() - K2_3 * (3.0 * lat_rad).cos() + K2_5 * (5.0 * lat_rad).cos();
    (k1, k2)
}

/// Frame rotation for an angle in degrees, counter-clockwise positive.
#[inline]
fn frame_rotation(angle_deg: f64) -> Rotation2<f64> {
    Rotation2::new(deg_to_rad(-angle_deg))
}

/// Project `p2` into the local frame anchored at `p1`.
///
/// # Arguments
/// * `p1` - Anchor of the frame
/// * `p2` - Point to project
/// * `offset` - Position of `p1` in the local frame (meters)
/// * `angle_deg` - Frame rotation about `p1` (degrees, counter-clockwise positive)
///
/// Returns the position of `p2` in the local frame, in meters. Inputs are
/// not validated; NaN propagates.
pub fn geo_to_local_xy(p1: GeoPoint, p2: GeoPoint, offset: LocalPoint, angle_deg: f64) -> LocalPoint {
    let offset_x_km = offset.x / METERS_PER_KM;
    let offset_y_km = offset.y / METERS_PER_KM;

    let lat_mean_rad = deg_to_rad(0.5 * (p2.lat + p1.lat));
    let d_lat = p2.lat - p1.lat;
    let d_lng = p2.lng - p1.lng;

    let (k1, k2) = degree_lengths_km(lat_mean_rad);
    let delta = Vector2::new(k2 * d_lng, k1 * d_lat);

    let rotated = frame_rotation(angle_deg) * delta;

    LocalPoint::new(
        (offset_x_km + rotated.x) * METERS_PER_KM,
        (offset_y_km + rotated.y) * METERS_PER_KM,
    )
}

/// Recover the geographic position of a point from its local coordinates.
///
/// # Arguments
/// * `p1` - Anchor of the frame
/// * `offset1` - Position of `p1` in the local frame (meters)
/// * `offset2` - Position of the wanted point in the local frame (meters)
/// * `angle_deg` - Frame rotation about `p1` (degrees, counter-clockwise positive)
///
/// Singular when `p1.lat` is ±90°: the longitude comes out infinite or NaN.
pub fn local_xy_to_geo(p1: GeoPoint, offset1: LocalPoint, offset2: LocalPoint, angle_deg: f64) -> GeoPoint {
    let delta_km = Vector2::new(
        offset2.x / METERS_PER_KM - offset1.x / METERS_PER_KM,
        offset2.y / METERS_PER_KM - offset1.y / METERS_PER_KM,
    );

    let unrotated = frame_rotation(angle_deg).inverse() * delta_km;

    let d_lat = unrotated.y / EARTH_RADIUS_KM;
    let d_lng = unrotated.x / (EARTH_RADIUS_KM * deg_to_rad(p1.lat).cos());

    GeoPoint::new(p1.lat + rad_to_deg(d_lat), p1.lng + rad_to_deg(d_lng))
}
