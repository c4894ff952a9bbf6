//! A reusable local frame: anchor, planar offset and rotation bundled together.

use frame_common::{FrameResult, GeoPoint, LocalPoint};
use serde::{Deserialize, Serialize};

use crate::checked::{try_geo_to_local_xy, try_local_xy_to_geo};
use crate::local::{geo_to_local_xy, local_xy_to_geo};

/// Local planar frame anchored at a geographic point.
///
/// `offset` is where the anchor sits in the frame (meters) and `angle_deg`
/// is the frame rotation about the anchor, counter-clockwise positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocalFrame {
    pub anchor: GeoPoint,
    #[serde(default)]
    pub offset: LocalPoint,
    #[serde(default)]
    pub angle_deg: f64,
}

impl LocalFrame {
    /// Unrotated frame with the anchor at the origin.
    pub fn new(anchor: GeoPoint) -> Self {
        Self {
            anchor,
            offset: LocalPoint::ORIGIN,
            angle_deg: 0.0,
        }
    }

    pub fn with_offset(mut self, offset: LocalPoint) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_angle(mut self, angle_deg: f64) -> Self {
        self.angle_deg = angle_deg;
        self
    }

    /// Position of `point` in this frame (meters).
    pub fn to_local(&self, point: GeoPoint) -> LocalPoint {
        geo_to_local_xy(self.anchor, point, self.offset, self.angle_deg)
    }

    /// Geographic position of a point given in this frame.
    pub fn to_geo(&self, local: LocalPoint) -> GeoPoint {
        local_xy_to_geo(self.anchor, self.offset, local, self.angle_deg)
    }

    pub fn try_to_local(&self, point: GeoPoint) -> FrameResult<LocalPoint> {
        try_geo_to_local_xy(self.anchor, point, self.offset, self.angle_deg)
    }

    pub fn try_to_geo(&self, local: LocalPoint) -> FrameResult<GeoPoint> {
        try_local_xy_to_geo(self.anchor, self.offset, local, self.angle_deg)
    }
}
