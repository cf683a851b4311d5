//! Image path repair.
//!
//! The capture process names files `image_<n>.jpg` without knowing how many
//! images will follow. Whenever the count gains a digit it renames every file
//! on disk to the new zero-padded width, but the monitor log keeps the names
//! as first written. Rewriting the logged paths to the batch width makes them
//! point at files that actually exist.

mod error;
#[cfg(test)]
mod tests;

pub use error::ReconcileError;

use crate::event::ImageEvent;
use std::path::Path;
use tracing::debug;

const IMAGE_PREFIX: &str = "image_";
const IMAGE_EXTENSION: &str = "jpg";

/// Rewrites each `file_path` in place to `<dir>/image_<index>.jpg`, with the
/// index zero-padded to the digit count of `images.len()`.
///
/// Order is untouched and every index keeps its numeric value.
pub fn reconcile_image_paths(images: &mut [ImageEvent]) -> Result<(), ReconcileError> {
    let width = images.len().to_string().len();

    for image in images.iter_mut() {
        image.file_path = padded_path(&image.file_path, width)?;
    }

    debug!(count = images.len(), width, "reconciled image paths");
    Ok(())
}

/// Numeric index embedded in an `image_<index>.<ext>` file name.
pub fn image_index(path: &str) -> Option<u64> {
    let name = Path::new(path).file_name()?.to_str()?;
    let (digits, _ext) = name.strip_prefix(IMAGE_PREFIX)?.split_once('.')?;

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    digits.parse().ok()
}

fn padded_path(path: &str, width: usize) -> Result<String, ReconcileError> {
    let index = image_index(path).ok_or_else(|| ReconcileError::malformed(path))?;
    let dir = Path::new(path).parent().unwrap_or_else(|| Path::new(""));

    let file_name = format!("{IMAGE_PREFIX}{index:0width$}.{IMAGE_EXTENSION}");
    Ok(dir.join(file_name).display().to_string())
}
