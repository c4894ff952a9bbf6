//! Subcommand definitions and execution.

use clap::Subcommand;
use frame_common::{FrameResult, GeoPoint, LocalPoint, PointParseError};
use projection::{angle_between_points, rotate_point};
use serde::Serialize;
use tracing::debug;

use crate::config::FrameConfig;

fn parse_geo(s: &str) -> Result<GeoPoint, PointParseError> {
    GeoPoint::from_str_pair(s)
}

fn parse_local(s: &str) -> Result<LocalPoint, PointParseError> {
    LocalPoint::from_str_pair(s)
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Project a geographic point into the local frame
    ToLocal {
        /// Frame anchor as LAT,LNG (falls back to the config file)
        #[arg(long, value_parser = parse_geo, allow_hyphen_values = true)]
        anchor: Option<GeoPoint>,

        /// Point to project as LAT,LNG
        #[arg(long, value_parser = parse_geo, allow_hyphen_values = true)]
        point: GeoPoint,

        /// Anchor position in the frame as X,Y meters
        #[arg(long, value_parser = parse_local, allow_hyphen_values = true)]
        offset: Option<LocalPoint>,

        /// Frame rotation in degrees, counter-clockwise positive
        #[arg(long, allow_hyphen_values = true)]
        angle: Option<f64>,
    },

    /// Convert local frame coordinates back to LAT,LNG
    ToGeo {
        /// Frame anchor as LAT,LNG (falls back to the config file)
        #[arg(long, value_parser = parse_geo, allow_hyphen_values = true)]
        anchor: Option<GeoPoint>,

        /// Position in the frame as X,Y meters
        #[arg(long, value_parser = parse_local, allow_hyphen_values = true)]
        local: LocalPoint,

        /// Anchor position in the frame as X,Y meters
        #[arg(long, value_parser = parse_local, allow_hyphen_values = true)]
        offset: Option<LocalPoint>,

        /// Frame rotation in degrees, counter-clockwise positive
        #[arg(long, allow_hyphen_values = true)]
        angle: Option<f64>,
    },

    /// Rotate a point about a center, clockwise positive
    Rotate {
        #[arg(long, value_parser = parse_local, allow_hyphen_values = true)]
        center: LocalPoint,

        #[arg(long, value_parser = parse_local, allow_hyphen_values = true)]
        point: LocalPoint,

        #[arg(long, allow_hyphen_values = true)]
        angle: f64,
    },

    /// Bearing from center to point in [0, 360)
    Angle {
        #[arg(long, value_parser = parse_local, allow_hyphen_values = true)]
        center: LocalPoint,

        #[arg(long, value_parser = parse_local, allow_hyphen_values = true)]
        point: LocalPoint,
    },
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::ToLocal { .. } => "to-local",
            Command::ToGeo { .. } => "to-geo",
            Command::Rotate { .. } => "rotate",
            Command::Angle { .. } => "angle",
        }
    }
}

/// Result of a subcommand, serialized as a flat JSON object.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Output {
    Local(LocalPoint),
    Geo(GeoPoint),
    Angle { angle: f64 },
}

/// Run a subcommand. `strict` selects the validating conversions.
pub fn execute(command: &Command, config: &FrameConfig, strict: bool) -> FrameResult<Output> {
    match command {
        Command::ToLocal {
            anchor,
            point,
            offset,
            angle,
        } => {
            let frame = config.resolve_frame(*anchor, *offset, *angle)?;
            debug!(?frame, strict, "Resolved frame");
            let local = if strict {
                frame.try_to_local(*point)?
            } else {
                frame.to_local(*point)
            };
            Ok(Output::Local(local))
        }
        Command::ToGeo {
            anchor,
            local,
            offset,
            angle,
        } => {
            let frame = config.resolve_frame(*anchor, *offset, *angle)?;
            debug!(?frame, strict, "Resolved frame");
            let geo = if strict {
                frame.try_to_geo(*local)?
            } else {
                frame.to_geo(*local)
            };
            Ok(Output::Geo(geo))
        }
        Command::Rotate {
            center,
            point,
            angle,
        } => {
            if strict {
                center.validate()?;
                point.validate()?;
                frame_common::validate_angle(*angle)?;
            }
            Ok(Output::Local(rotate_point(*center, *point, *angle)))
        }
        Command::Angle { center, point } => {
            if strict {
                center.validate()?;
                point.validate()?;
            }
            Ok(Output::Angle {
                angle: angle_between_points(*center, *point),
            })
        }
    }
}
