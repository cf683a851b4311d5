use chrono::NaiveDateTime;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("no air readings to plot")]
    NoData,

    #[error("non-numeric {metric} value {value:?} at {timestamp}")]
    InvalidValue {
        metric: &'static str,
        value: String,
        timestamp: NaiveDateTime,
    },

    #[error("failed to draw chart: {0}")]
    Draw(String),
}

#[derive(Debug, Error)]
pub enum AnnotateError {
    #[error("image path does not carry a frame index: {path}")]
    MissingIndex { path: PathBuf },

    #[error("source image not found: {path}")]
    MissingImage { path: PathBuf },

    #[cfg(feature = "frames")]
    #[error("failed to decode or encode {path}: {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to draw overlay on {path}: {reason}")]
    Draw { path: PathBuf, reason: String },
}
