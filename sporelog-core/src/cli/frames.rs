use crate::conf::SporelogConfig;
use crate::render::{FrameBatchSummary, FrameOptions, annotate_frames};
use crate::timeline::Timeline;
use crate::window::TimeWindow;
use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::num::NonZeroU64;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct FramesArgs {
    /// Overwrite frames that already exist in the output directory
    #[arg(short, long)]
    pub clobber: bool,

    /// Directory the annotated frames are written to
    #[arg(short, long)]
    pub output_dir: PathBuf,

    /// Only annotate frames whose index is a multiple of N
    #[arg(short, long, value_name = "N", default_value = "1")]
    pub nth_frame: NonZeroU64,
}

/// Annotates every correlated frame into `args.output_dir`.
///
/// Per-image failures are logged and counted, not returned.
pub fn run(
    cfg: &SporelogConfig,
    window: &TimeWindow,
    args: &FramesArgs,
) -> Result<FrameBatchSummary> {
    let timeline =
        Timeline::load(&cfg.logs.paths(), window).context("failed to build timeline")?;

    fs::create_dir_all(&args.output_dir).with_context(|| {
        format!(
            "failed to create output directory {}",
            args.output_dir.display()
        )
    })?;

    let opts = FrameOptions {
        output_dir: &args.output_dir,
        clobber: args.clobber,
        nth_frame: args.nth_frame,
        style: &cfg.frames,
    };
    let summary = annotate_frames(&timeline.correlated, &opts);

    info!(
        written = summary.written,
        skipped = summary.skipped,
        failed = summary.failed,
        "frames complete"
    );
    Ok(summary)
}
