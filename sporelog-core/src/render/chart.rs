use crate::conf::GraphConfig;
use crate::render::{AirMetric, ChartError, MetricSeries};
use chrono::{Duration, NaiveDateTime};
use plotters::coord::types::RangedDateTime;
use plotters::prelude::*;
use std::path::Path;
use tracing::info;

const CHART_TITLE: &str = "Enclosure Air Data";
const DATE_LABEL_FORMAT: &str = "%Y-%m-%d";

/// Draws one stacked panel per series, sharing the time axis, to a PNG at
/// `out`.
pub fn render_chart(
    series: &[MetricSeries],
    out: &Path,
    cfg: &GraphConfig,
) -> Result<(), ChartError> {
    let (start, end) = time_bounds(series).ok_or(ChartError::NoData)?;

    let root = BitMapBackend::new(out, (cfg.width, cfg.height)).into_drawing_area();
    root.fill(&WHITE).map_err(draw_err)?;
    let root = root
        .titled(CHART_TITLE, ("sans-serif", 30))
        .map_err(draw_err)?;

    let panels = root.split_evenly((series.len(), 1));
    let last = series.len().saturating_sub(1);

    for (idx, (panel, s)) in panels.iter().zip(series).enumerate() {
        let (lo, hi) = padded_range(s).ok_or(ChartError::NoData)?;

        let mut chart = ChartBuilder::on(panel)
            .margin(10)
            // Only the bottom panel carries date labels.
            .x_label_area_size(if idx == last { 40 } else { 10 })
            .y_label_area_size(70)
            .build_cartesian_2d(RangedDateTime::from(start..end), lo..hi)
            .map_err(draw_err)?;

        chart
            .configure_mesh()
            .y_desc(s.metric.label())
            .x_labels(if idx == last { 8 } else { 0 })
            .x_label_formatter(&|ts: &NaiveDateTime| ts.format(DATE_LABEL_FORMAT).to_string())
            .draw()
            .map_err(draw_err)?;

        chart
            .draw_series(LineSeries::new(s.points.iter().copied(), &metric_color(s.metric)))
            .map_err(draw_err)?;
    }

    root.present().map_err(draw_err)?;

    info!(path = %out.display(), panels = series.len(), "wrote figure image");
    Ok(())
}

fn metric_color(metric: AirMetric) -> RGBColor {
    match metric {
        AirMetric::Co2 => RED,
        AirMetric::Rh => BLUE,
        AirMetric::Temp => GREEN,
    }
}

/// Earliest and latest timestamp across all series. A single instant is
/// widened so the axis has a non-zero span.
pub(crate) fn time_bounds(series: &[MetricSeries]) -> Option<(NaiveDateTime, NaiveDateTime)> {
    let mut stamps = series.iter().flat_map(|s| s.points.iter().map(|(ts, _)| *ts));
    let first = stamps.next()?;
    let (start, end) = stamps.fold((first, first), |(lo, hi), ts| (lo.min(ts), hi.max(ts)));

    if start == end {
        Some((start - Duration::minutes(1), end + Duration::minutes(1)))
    } else {
        Some((start, end))
    }
}

/// Value range with 5% headroom on each side.
pub(crate) fn padded_range(series: &MetricSeries) -> Option<(f64, f64)> {
    let (lo, hi) = series.value_range()?;
    let pad = if hi > lo { (hi - lo) * 0.05 } else { 1.0 };
    Some((lo - pad, hi + pad))
}

fn draw_err<E: std::fmt::Display>(e: E) -> ChartError {
    ChartError::Draw(e.to_string())
}
