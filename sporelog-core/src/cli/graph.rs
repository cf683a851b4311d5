use crate::conf::SporelogConfig;
use crate::parse::parse_air_log;
use crate::render::{AirMetric, build_series, render_chart};
use crate::window::TimeWindow;
use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct GraphArgs {
    /// Output PNG file
    #[arg(short, long, default_value = "air_data.png")]
    pub file: PathBuf,

    /// Metrics to plot, one panel each, top to bottom
    #[arg(
        short,
        long,
        value_enum,
        num_args = 1..,
        default_values_t = AirMetric::ALL
    )]
    pub data: Vec<AirMetric>,
}

/// Charts the air log. Only the air log is read.
pub fn run(cfg: &SporelogConfig, window: &TimeWindow, args: &GraphArgs) -> Result<()> {
    let path = &cfg.logs.air;
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read air log {}", path.display()))?;

    let readings = parse_air_log(&text, window)
        .with_context(|| format!("failed to parse air log {}", path.display()))?;

    let series = build_series(&readings, &args.data, window)?;
    render_chart(&series, &args.file, &cfg.graph)
        .with_context(|| format!("failed to render {}", args.file.display()))?;

    info!(
        file = %args.file.display(),
        readings = readings.len(),
        "graph complete"
    );
    Ok(())
}
