use crate::conf::FrameStyle;
use crate::event::CorrelatedFrame;
use crate::reconcile::image_index;
use crate::render::AnnotateError;
use std::num::NonZeroU64;
use std::path::{Path, PathBuf};

/// Shown in place of a sensor value when no reading preceded the frame.
pub const UNKNOWN_VALUE: &str = "--";

const OVERLAY_DATE_FORMAT: &str = "%d-%b-%Y %H:%M";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indicator {
    pub label: &'static str,
    pub on: bool,
}

/// Text drawn on a frame: readings down the left edge, relay indicators down
/// the right edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayText {
    pub lines: [String; 4],
    pub indicators: [Indicator; 4],
}

impl OverlayText {
    pub fn for_frame(frame: &CorrelatedFrame) -> Self {
        let value = |v: &Option<String>| v.clone().unwrap_or_else(|| UNKNOWN_VALUE.to_string());

        Self {
            lines: [
                frame
                    .timestamp
                    .format(OVERLAY_DATE_FORMAT)
                    .to_string()
                    .to_uppercase(),
                format!("HUM: {}%", value(&frame.rh_value)),
                format!("CO2: {}ppm", value(&frame.co2_value)),
                format!("TMP: {}°C", value(&frame.temp_value)),
            ],
            indicators: [
                Indicator {
                    label: "HUMIDIFIER:  ",
                    on: frame.hum_outlet,
                },
                Indicator {
                    label: "FAE_FAN:  ",
                    on: frame.fan_outlet,
                },
                Indicator {
                    label: "HEATER:  ",
                    on: frame.heat_outlet,
                },
                Indicator {
                    label: "LIGHTS:  ",
                    on: frame.light_outlet,
                },
            ],
        }
    }
}

/// What the annotator should do with one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameDecision {
    Render { target: PathBuf },
    SkipStride,
    SkipExisting { target: PathBuf },
}

/// Applies the stride and overwrite rules, then checks the source exists.
pub fn decide_frame(
    frame: &CorrelatedFrame,
    output_dir: &Path,
    clobber: bool,
    nth_frame: NonZeroU64,
) -> Result<FrameDecision, AnnotateError> {
    let source = Path::new(&frame.file_path);

    let index = image_index(&frame.file_path).ok_or_else(|| AnnotateError::MissingIndex {
        path: source.to_path_buf(),
    })?;
    if index % nth_frame.get() != 0 {
        return Ok(FrameDecision::SkipStride);
    }

    // image_index succeeded, so there is a file name.
    let target = output_dir.join(source.file_name().unwrap_or_default());
    if !clobber && target.is_file() {
        return Ok(FrameDecision::SkipExisting { target });
    }

    if !source.is_file() {
        return Err(AnnotateError::MissingImage {
            path: source.to_path_buf(),
        });
    }

    Ok(FrameDecision::Render { target })
}

/// Top edge of text row `slot`.
pub(crate) fn slot_y(style: &FrameStyle, slot: usize) -> i32 {
    (style.v_margin + style.line_spacing * slot as u32) as i32
}

/// Center and radius of the relay indicator disc in row `slot`, right-aligned
/// against the margin of an image `width` pixels wide.
pub(crate) fn indicator_disc(width: u32, style: &FrameStyle, slot: usize) -> ((i32, i32), i32) {
    let radius = (style.font_px / 2) as i32;
    let right = width as i32 - style.h_margin as i32;
    let top = slot_y(style, slot);

    ((right - radius, top + radius), radius)
}

/// Left edge of an indicator label `label_width` pixels wide. The label's
/// trailing spaces leave room for the disc.
pub(crate) fn indicator_label_x(width: u32, style: &FrameStyle, label_width: u32) -> i32 {
    width as i32 - style.h_margin as i32 - label_width as i32
}
