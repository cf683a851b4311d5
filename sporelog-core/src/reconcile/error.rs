use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReconcileError {
    #[error("image path does not end in `image_<index>.<ext>`: {path}")]
    MalformedImagePath { path: String },
}

impl ReconcileError {
    pub fn malformed(path: impl Into<String>) -> Self {
        Self::MalformedImagePath { path: path.into() }
    }
}
