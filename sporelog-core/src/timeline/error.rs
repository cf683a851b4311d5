use crate::parse::ParseError;
use crate::reconcile::ReconcileError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TimelineError {
    #[error("failed to read log file {path}: {source}")]
    ReadLog {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse air log")]
    Air(#[source] ParseError),

    #[error("failed to parse monitor log")]
    Monitor(#[source] ParseError),

    #[error(transparent)]
    Reconcile(#[from] ReconcileError),
}

impl TimelineError {
    pub fn read_log(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadLog {
            path: path.into(),
            source,
        }
    }
}
