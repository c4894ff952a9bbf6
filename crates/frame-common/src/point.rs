//! Geographic and local planar point types.

use serde::{Deserialize, Serialize};

use crate::error::{FrameError, FrameResult};

/// A geographic position on a spherical earth.
///
/// Latitude and longitude are in degrees. Values outside the usual
/// `[-90, 90]` / `[-180, 180]` ranges are accepted as-is; call
/// [`GeoPoint::validate`] to reject them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Parse a "lat,lng" pair.
    pub fn from_str_pair(s: &str) -> Result<Self, PointParseError> {
        let (lat, lng) = parse_pair(s)?;
        Ok(Self { lat, lng })
    }

    /// Check that both components are finite and within geographic range.
    pub fn validate(&self) -> FrameResult<()> {
        FrameError::check_finite("lat", self.lat)?;
        FrameError::check_finite("lng", self.lng)?;

        if !(-90.0..=90.0).contains(&self.lat) {
            return Err(FrameError::LatitudeOutOfRange(self.lat));
        }
        if !(-180.0..=180.0).contains(&self.lng) {
            return Err(FrameError::LongitudeOutOfRange(self.lng));
        }
        Ok(())
    }
}

impl From<(f64, f64)> for GeoPoint {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self { lat, lng }
    }
}

impl From<GeoPoint> for (f64, f64) {
    fn from(p: GeoPoint) -> Self {
        (p.lat, p.lng)
    }
}

/// An offset in a local planar frame, in meters.
///
/// The frame's origin and orientation are set by whoever produced the
/// point: an anchor position plus a rotation angle.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LocalPoint {
    pub x: f64,
    pub y: f64,
}

impl LocalPoint {
    pub const ORIGIN: LocalPoint = LocalPoint { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Parse an "x,y" pair.
    pub fn from_str_pair(s: &str) -> Result<Self, PointParseError> {
        let (x, y) = parse_pair(s)?;
        Ok(Self { x, y })
    }

    /// Check that both components are finite.
    pub fn validate(&self) -> FrameResult<()> {
        FrameError::check_finite("x", self.x)?;
        FrameError::check_finite("y", self.y)?;
        Ok(())
    }
}

impl From<(f64, f64)> for LocalPoint {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<LocalPoint> for (f64, f64) {
    fn from(p: LocalPoint) -> Self {
        (p.x, p.y)
    }
}

fn parse_pair(s: &str) -> Result<(f64, f64), PointParseError> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != 2 {
        return Err(PointParseError::InvalidFormat(s.to_string()));
    }

    let first = parts[0]
        .parse()
        .map_err(|_| PointParseError::InvalidNumber(parts[0].to_string()))?;
    let second = parts[1]
        .parse()
        .map_err(|_| PointParseError::InvalidNumber(parts[1].to_string()))?;

    Ok((first, second))
}

#[derive(Debug, thiserror::Error)]
pub enum PointParseError {
    #[error("Invalid point format: {0}. Expected 'a,b'")]
    InvalidFormat(String),

    #[error("Invalid number in point: {0}")]
    InvalidNumber(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_geo_point() {
        let p = GeoPoint::from_str_pair("52.37, 4.9").unwrap();
        assert_eq!(p.lat, 52.37);
        assert_eq!(p.lng, 4.9);
    }

    #[test]
    fn test_validate_geo_point() {
        assert!(GeoPoint::new(90.0, -180.0).validate().is_ok());
        assert!(matches!(
            GeoPoint::new(90.5, 0.0).validate(),
            Err(FrameError::LatitudeOutOfRange(_))
        ));
        assert!(matches!(
            GeoPoint::new(0.0, 180.1).validate(),
            Err(FrameError::LongitudeOutOfRange(_))
        ));
        assert!(matches!(
            GeoPoint::new(f64::NAN, 0.0).validate(),
            Err(FrameError::NonFinite { field: "lat", .. })
        ));
    }

    #[test]
    fn test_local_point_default_is_origin() {
        assert_eq!(LocalPoint::default(), LocalPoint::ORIGIN);
    }
}
