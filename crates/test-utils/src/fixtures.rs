//! Common test fixtures for local-frame tests.
//!
//! Reference anchors spread over latitudes so that curvature effects in
//! the projection are exercised, plus degenerate polar inputs.

/// Geographic reference points as (lat, lng) in degrees.
pub mod geo {
    /// Null Island
    pub const ORIGIN: (f64, f64) = (0.0, 0.0);

    /// Utrecht, Netherlands
    pub const UTRECHT: (f64, f64) = (52.0, 5.0);

    /// Kansas City, MO
    pub const KANSAS_CITY: (f64, f64) = (39.0, -94.5);

    /// Sydney, Australia (southern hemisphere)
    pub const SYDNEY: (f64, f64) = (-33.8688, 151.2093);

    /// Tromsø, Norway (high latitude)
    pub const TROMSO: (f64, f64) = (69.6492, 18.9553);

    /// North pole, where the spherical inverse is singular
    pub const NORTH_POLE: (f64, f64) = (90.0, 0.0);

    /// South pole
    pub const SOUTH_POLE: (f64, f64) = (-90.0, 0.0);

    /// All non-polar anchors, for sweeping tests.
    pub const ANCHORS: [(f64, f64); 5] = [ORIGIN, UTRECHT, KANSAS_CITY, SYDNEY, TROMSO];
}

/// Small displacements in degrees (dlat, dlng), all well under 1 km.
pub mod offsets {
    pub const NORTH_EAST: (f64, f64) = (0.004, 0.006);
    pub const SOUTH_WEST: (f64, f64) = (-0.003, -0.005);
    pub const DUE_NORTH: (f64, f64) = (0.005, 0.0);
    pub const DUE_EAST: (f64, f64) = (0.0, 0.005);

    pub const ALL: [(f64, f64); 4] = [NORTH_EAST, SOUTH_WEST, DUE_NORTH, DUE_EAST];
}

/// Rotation angles in degrees covering every quadrant and beyond one turn.
pub const ANGLES: [f64; 8] = [0.0, 30.0, 90.0, 135.0, 180.0, -45.0, 270.0, 405.0];
