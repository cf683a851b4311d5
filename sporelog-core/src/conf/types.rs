use crate::conf::ConfigError;
use crate::timeline::LogPaths;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const DEFAULT_AIR_LOG: &str = "/media/asustor/MushroomFarm/data/air_data.log";
const DEFAULT_MONITOR_LOG: &str = "/media/asustor/MushroomFarm/data/monitor.log";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct SporelogConfig {
    pub logs: LogsConfig,
    pub frames: FrameStyle,
    pub graph: GraphConfig,
}

impl SporelogConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.frames.validate()?;
        self.graph.validate()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogsConfig {
    pub air: PathBuf,
    pub monitor: PathBuf,
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            air: PathBuf::from(DEFAULT_AIR_LOG),
            monitor: PathBuf::from(DEFAULT_MONITOR_LOG),
        }
    }
}

impl LogsConfig {
    pub fn paths(&self) -> LogPaths {
        LogPaths {
            air: self.air.clone(),
            monitor: self.monitor.clone(),
        }
    }
}

/// Overlay text and layout for annotated frames. Sizes are in pixels.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct FrameStyle {
    pub font_family: String,
    pub font_px: u32,
    pub line_spacing: u32,
    pub h_margin: u32,
    pub v_margin: u32,
    pub jpeg_quality: u8,
}

impl Default for FrameStyle {
    fn default() -> Self {
        Self {
            font_family: "DejaVu Sans Mono".to_string(),
            font_px: 84,
            line_spacing: 90,
            h_margin: 30,
            v_margin: 10,
            jpeg_quality: 95,
        }
    }
}

impl FrameStyle {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.font_px == 0 {
            return Err(ConfigError::InvalidFrameStyle {
                reason: "font_px must be greater than zero",
            });
        }
        if !(1..=100).contains(&self.jpeg_quality) {
            return Err(ConfigError::InvalidFrameStyle {
                reason: "jpeg_quality must be between 1 and 100",
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct GraphConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 960,
        }
    }
}

impl GraphConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::InvalidGraph {
                reason: "width and height must be greater than zero",
            });
        }
        Ok(())
    }
}
