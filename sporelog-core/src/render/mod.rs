//! Renderers that consume the correlated timeline: a stacked time-series
//! chart of the air log and annotated copies of captured frames.

#[cfg(feature = "chart")]
mod chart;
mod error;
#[cfg(feature = "frames")]
mod frames;
mod overlay;
mod series;

#[cfg(feature = "chart")]
pub use chart::render_chart;
pub use error::*;
#[cfg(feature = "frames")]
pub use frames::{FrameBatchSummary, FrameOptions, FrameOutcome, annotate_frame, annotate_frames};
pub use overlay::{FrameDecision, Indicator, OverlayText, decide_frame};
pub use series::{AirMetric, MetricSeries, build_series};
