use crate::conf::FrameStyle;
use crate::event::CorrelatedFrame;
use crate::render::overlay::{indicator_disc, indicator_label_x, slot_y};
use crate::render::{AnnotateError, FrameDecision, OverlayText, decide_frame};
use image::RgbImage;
use image::codecs::jpeg::JpegEncoder;
use plotters::prelude::*;
use plotters::style::{FontDesc, FontFamily, FontStyle};
use std::fs::File;
use std::io::BufWriter;
use std::num::NonZeroU64;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

#[derive(Debug, Clone)]
pub struct FrameOptions<'a> {
    pub output_dir: &'a Path,
    pub clobber: bool,
    pub nth_frame: NonZeroU64,
    pub style: &'a FrameStyle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameOutcome {
    Written(PathBuf),
    SkippedStride,
    SkippedExisting(PathBuf),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameBatchSummary {
    pub written: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Annotates every frame, carrying on past per-image failures.
pub fn annotate_frames(frames: &[CorrelatedFrame], opts: &FrameOptions<'_>) -> FrameBatchSummary {
    let mut summary = FrameBatchSummary::default();

    for frame in frames {
        match annotate_frame(frame, opts) {
            Ok(FrameOutcome::Written(_)) => summary.written += 1,
            Ok(FrameOutcome::SkippedStride | FrameOutcome::SkippedExisting(_)) => {
                summary.skipped += 1
            }
            Err(e) => {
                warn!(frame = %frame.file_path, error = %e, "failed to annotate frame");
                summary.failed += 1;
            }
        }
    }

    summary
}

pub fn annotate_frame(
    frame: &CorrelatedFrame,
    opts: &FrameOptions<'_>,
) -> Result<FrameOutcome, AnnotateError> {
    let target = match decide_frame(frame, opts.output_dir, opts.clobber, opts.nth_frame)? {
        FrameDecision::Render { target } => target,
        FrameDecision::SkipStride => return Ok(FrameOutcome::SkippedStride),
        FrameDecision::SkipExisting { target } => {
            debug!(target = %target.display(), "output exists, skipping");
            return Ok(FrameOutcome::SkippedExisting(target));
        }
    };

    let source = Path::new(&frame.file_path);
    let image = image::open(source)
        .map_err(|e| AnnotateError::Image {
            path: source.to_path_buf(),
            source: e,
        })?
        .to_rgb8();

    let annotated = draw_overlay(image, &OverlayText::for_frame(frame), opts.style)
        .map_err(|reason| AnnotateError::Draw {
            path: source.to_path_buf(),
            reason,
        })?;

    info!(target = %target.display(), "writing image");
    write_jpeg(&annotated, &target, opts.style.jpeg_quality)?;

    Ok(FrameOutcome::Written(target))
}

fn draw_overlay(
    image: RgbImage,
    text: &OverlayText,
    style: &FrameStyle,
) -> Result<RgbImage, String> {
    let (width, height) = image.dimensions();
    let mut raw = image.into_raw();

    {
        let root = BitMapBackend::with_buffer(&mut raw, (width, height)).into_drawing_area();

        let font = FontDesc::new(
            FontFamily::Name(&style.font_family),
            style.font_px as f64,
            FontStyle::Bold,
        )
        .color(&WHITE);

        let left = style.h_margin as i32;
        for (slot, line) in text.lines.iter().enumerate() {
            root.draw_text(line, &font, (left, slot_y(style, slot)))
                .map_err(|e| e.to_string())?;
        }

        for (slot, indicator) in text.indicators.iter().enumerate() {
            let (label_width, _) = root
                .estimate_text_size(indicator.label, &font)
                .map_err(|e| e.to_string())?;
            let x = indicator_label_x(width, style, label_width);
            root.draw_text(indicator.label, &font, (x, slot_y(style, slot)))
                .map_err(|e| e.to_string())?;

            let (center, radius) = indicator_disc(width, style, slot);
            let fill = if indicator.on { GREEN } else { RED };
            root.draw(&Circle::new(center, radius, fill.filled()))
                .map_err(|e| e.to_string())?;
            root.draw(&Circle::new(center, radius, BLACK.stroke_width(2)))
                .map_err(|e| e.to_string())?;
        }

        root.present().map_err(|e| e.to_string())?;
    }

    RgbImage::from_raw(width, height, raw).ok_or_else(|| "pixel buffer size changed".to_string())
}

fn write_jpeg(image: &RgbImage, target: &Path, quality: u8) -> Result<(), AnnotateError> {
    let file = File::create(target).map_err(|e| AnnotateError::Write {
        path: target.to_path_buf(),
        source: e,
    })?;

    JpegEncoder::new_with_quality(BufWriter::new(file), quality)
        .encode_image(image)
        .map_err(|e| AnnotateError::Image {
            path: target.to_path_buf(),
            source: e,
        })
}
