use crate::event::SensorReading;
use crate::render::ChartError;
use crate::window::TimeWindow;
use chrono::NaiveDateTime;
use clap::ValueEnum;

/// A quantity from the air log that can be charted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum AirMetric {
    Co2,
    Rh,
    Temp,
}

impl AirMetric {
    pub const ALL: [AirMetric; 3] = [AirMetric::Co2, AirMetric::Rh, AirMetric::Temp];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Co2 => "co2",
            Self::Rh => "rh",
            Self::Temp => "temp",
        }
    }

    /// Y-axis caption.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Co2 => "CO2 (ppm)",
            Self::Rh => "Humidity (%)",
            Self::Temp => "Temp (°C)",
        }
    }

    fn raw_value<'a>(&self, reading: &'a SensorReading) -> &'a str {
        match self {
            Self::Co2 => &reading.co2_ppm,
            Self::Rh => &reading.rh_pct,
            Self::Temp => &reading.temp_degc,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MetricSeries {
    pub metric: AirMetric,
    pub points: Vec<(NaiveDateTime, f64)>,
}

impl MetricSeries {
    /// `(min, max)` of the values, `None` when empty.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        self.points.iter().map(|(_, v)| *v).fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
    }
}

/// Converts readings inside `window` into one numeric series per metric, in
/// the order requested. Duplicate metrics are plotted once.
pub fn build_series(
    readings: &[SensorReading],
    metrics: &[AirMetric],
    window: &TimeWindow,
) -> Result<Vec<MetricSeries>, ChartError> {
    let mut selected: Vec<AirMetric> = Vec::with_capacity(metrics.len());
    for metric in metrics {
        if !selected.contains(metric) {
            selected.push(*metric);
        }
    }

    let in_window: Vec<&SensorReading> = readings
        .iter()
        .filter(|r| window.contains(r.timestamp))
        .collect();

    if in_window.is_empty() || selected.is_empty() {
        return Err(ChartError::NoData);
    }

    selected
        .into_iter()
        .map(|metric| {
            let points = in_window
                .iter()
                .map(|r| {
                    let raw = metric.raw_value(r);
                    raw.parse::<f64>()
                        .map(|v| (r.timestamp, v))
                        .map_err(|_| ChartError::InvalidValue {
                            metric: metric.as_str(),
                            value: raw.to_string(),
                            timestamp: r.timestamp,
                        })
                })
                .collect::<Result<Vec<_>, _>>()?;

            Ok(MetricSeries { metric, points })
        })
        .collect()
}
