//! Conversions between geographic coordinates and local planar frames.
//!
//! Everything here is a pure function of its inputs: no shared state, safe
//! to call from any thread.
//!
//! - [`geo_to_local_xy`] / [`local_xy_to_geo`]: anchor-relative projection
//!   and its approximate inverse (counter-clockwise frame rotation).
//! - [`rotate_point`] / [`angle_between_points`]: planar helpers
//!   (clockwise point rotation, counter-clockwise bearing).
//! - [`LocalFrame`]: the projection parameters bundled into one value.

pub mod checked;
pub mod frame;
pub mod local;
pub mod rotation;

pub use checked::{try_geo_to_local_xy, try_local_xy_to_geo};
pub use frame::LocalFrame;
pub use local::{geo_to_local_xy, local_xy_to_geo, EARTH_RADIUS_KM};
pub use rotation::{angle_between_points, rotate_point};
