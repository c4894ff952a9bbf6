//! Common types and utilities shared across the local-frame crates.

pub mod angle;
pub mod error;
pub mod point;

pub use angle::{deg_to_rad, normalize_degrees, rad_to_deg, validate_angle};
pub use error::{FrameError, FrameResult};
pub use point::{GeoPoint, LocalPoint, PointParseError};
