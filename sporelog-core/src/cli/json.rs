use crate::conf::SporelogConfig;
use crate::timeline::Timeline;
use crate::window::TimeWindow;
use anyhow::{Context, Result};

/// Prints the whole timeline as pretty JSON on stdout.
pub fn run(cfg: &SporelogConfig, window: &TimeWindow) -> Result<()> {
    let timeline =
        Timeline::load(&cfg.logs.paths(), window).context("failed to build timeline")?;

    let s = timeline
        .to_json_pretty()
        .context("failed to serialize timeline")?;
    println!("{s}");

    Ok(())
}
