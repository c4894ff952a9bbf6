//! Frame configuration loaded from YAML.
//!
//! ```yaml
//! strict: false
//! frame:
//!   anchor: { lat: 52.0, lng: 5.0 }
//!   offset: { x: 0.0, y: 0.0 }
//!   angle_deg: 0.0
//! ```
//!
//! Every field is optional; command-line values take precedence.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use frame_common::{FrameError, FrameResult, GeoPoint, LocalPoint};
use projection::LocalFrame;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrameConfig {
    /// Route conversions through the validating variants
    #[serde(default)]
    pub strict: bool,

    /// Default frame parameters
    #[serde(default)]
    pub frame: FrameDefaults,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrameDefaults {
    pub anchor: Option<GeoPoint>,
    pub offset: Option<LocalPoint>,
    pub angle_deg: Option<f64>,
}

impl FrameConfig {
    /// Load configuration from a YAML file.
    pub fn from_yaml<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: FrameConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Load from `path` if given, otherwise use defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::from_yaml(p),
            None => Ok(Self::default()),
        }
    }

    /// Build a frame from command-line overrides layered on the configured defaults.
    pub fn resolve_frame(
        &self,
        anchor: Option<GeoPoint>,
        offset: Option<LocalPoint>,
        angle_deg: Option<f64>,
    ) -> FrameResult<LocalFrame> {
        let anchor = anchor.or(self.frame.anchor).ok_or_else(|| {
            FrameError::Config("no anchor given on the command line or in the config file".into())
        })?;

        Ok(LocalFrame::new(anchor)
            .with_offset(offset.or(self.frame.offset).unwrap_or(LocalPoint::ORIGIN))
            .with_angle(angle_deg.or(self.frame.angle_deg).unwrap_or(0.0)))
    }
}
