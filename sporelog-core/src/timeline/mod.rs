//! End-to-end pipeline: raw log text -> parsed events -> repaired image
//! paths -> correlated frames.

mod error;

pub use error::TimelineError;

use crate::correlate::correlate;
use crate::event::{ActuatorStateChange, CorrelatedFrame, ImageEvent, SensorReading};
use crate::parse::{parse_air_log, parse_monitor_log};
use crate::reconcile::reconcile_image_paths;
use crate::window::TimeWindow;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Locations of the two service logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogPaths {
    pub air: PathBuf,
    pub monitor: PathBuf,
}

/// Everything recovered from one pair of logs.
///
/// Serializes to the `--json` export shape.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Timeline {
    pub air_data: Vec<SensorReading>,
    pub actions: Vec<ActuatorStateChange>,
    pub images: Vec<ImageEvent>,
    pub correlated: Vec<CorrelatedFrame>,
}

impl Timeline {
    /// Reads both logs fully, then builds the timeline.
    pub fn load(paths: &LogPaths, window: &TimeWindow) -> Result<Self, TimelineError> {
        let air_text = read_log(&paths.air)?;
        let monitor_text = read_log(&paths.monitor)?;

        let timeline = Self::build(&air_text, &monitor_text, window)?;

        info!(
            readings = timeline.air_data.len(),
            actions = timeline.actions.len(),
            images = timeline.images.len(),
            "loaded timeline"
        );

        Ok(timeline)
    }

    pub fn build(
        air_text: &str,
        monitor_text: &str,
        window: &TimeWindow,
    ) -> Result<Self, TimelineError> {
        let air_data = parse_air_log(air_text, window).map_err(TimelineError::Air)?;
        let monitor = parse_monitor_log(monitor_text, window).map_err(TimelineError::Monitor)?;

        let mut images = monitor.images;
        reconcile_image_paths(&mut images)?;

        let correlated = correlate(&images, &monitor.actions, &air_data);

        Ok(Self {
            air_data,
            actions: monitor.actions,
            images,
            correlated,
        })
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

fn read_log(path: &Path) -> Result<String, TimelineError> {
    fs::read_to_string(path).map_err(|e| TimelineError::read_log(path, e))
}
