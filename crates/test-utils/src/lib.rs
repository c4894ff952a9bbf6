//! Shared test utilities for the local-frame workspace.
//!
//! This crate provides common testing infrastructure:
//! - Approximate float and coordinate assertions
//! - Reference geographic and planar fixtures
//!
//! # Usage
//!
//! Add to your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! test-utils = { path = "../test-utils" }
//! ```
//!
//! Then import in your tests:
//!
//! ```ignore
//! use test_utils::{assert_approx_eq, fixtures};
//! ```

pub mod fixtures;

pub use fixtures::*;

/// Macro for approximate floating-point equality assertions.
///
/// # Usage
///
/// ```ignore
/// use test_utils::assert_approx_eq;
///
/// assert_approx_eq!(1.0001_f64, 1.0_f64, 0.001_f64); // passes
/// assert_approx_eq!(1.1_f64, 1.0_f64, 0.001_f64);    // fails
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr, $epsilon:expr) => {{
        let left: f64 = $left as f64;
        let right: f64 = $right as f64;
        let epsilon: f64 = $epsilon as f64;
        let diff = (left - right).abs();
        if !(diff <= epsilon) {
            panic!(
                "assertion failed: `(left ≈ right)`\n  left: `{:?}`,\n right: `{:?}`,\n  diff: `{:?}` > epsilon `{:?}`",
                left, right, diff, epsilon
            );
        }
    }};
}

/// Macro for approximate equality of coordinate pairs.
///
/// # Usage
///
/// ```ignore
/// use test_utils::assert_coords_approx_eq;
///
/// assert_coords_approx_eq!((1.0001, 2.0001), (1.0, 2.0), 0.001);
/// ```
#[macro_export]
macro_rules! assert_coords_approx_eq {
    (($x1:expr, $y1:expr), ($x2:expr, $y2:expr), $epsilon:expr) => {{
        $crate::assert_approx_eq!($x1, $x2, $epsilon);
        $crate::assert_approx_eq!($y1, $y2, $epsilon);
    }};
}

/// Approximate equality of two `LocalPoint`s, in meters.
#[macro_export]
macro_rules! assert_local_approx_eq {
    ($left:expr, $right:expr, $epsilon:expr) => {{
        let left: $crate::LocalPoint = $left;
        let right: $crate::LocalPoint = $right;
        $crate::assert_coords_approx_eq!((left.x, left.y), (right.x, right.y), $epsilon);
    }};
}

/// Approximate equality of two `GeoPoint`s, in degrees.
#[macro_export]
macro_rules! assert_geo_approx_eq {
    ($left:expr, $right:expr, $epsilon:expr) => {{
        let left: $crate::GeoPoint = $left;
        let right: $crate::GeoPoint = $right;
        $crate::assert_coords_approx_eq!((left.lat, left.lng), (right.lat, right.lng), $epsilon);
    }};
}

pub use frame_common::{GeoPoint, LocalPoint};
