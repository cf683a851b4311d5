use chrono::NaiveDateTime;
use serde::Serialize;

/// One line of the air-quality log.
///
/// Values are kept exactly as logged (unit suffix removed). Consumers that
/// need numbers convert lazily, so a reading never loses precision at parse
/// time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SensorReading {
    pub timestamp: NaiveDateTime,
    pub co2_ppm: String,
    #[serde(rename = "temp_degC")]
    pub temp_degc: String,
    pub rh_pct: String,
}

/// A `Capturing <path>` entry from the monitor log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageEvent {
    pub timestamp: NaiveDateTime,
    pub file_path: String,
}

/// A relay switching on or off, e.g.
/// `CO2 is HIGH (1528.5 >= 1000), turning ON  OUTLET 6 (fan)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActuatorStateChange {
    pub timestamp: NaiveDateTime,
    pub measure: String,
    pub state: bool,
    /// Lowercased, parentheses stripped. May name a device outside the
    /// tracked set.
    pub device: String,
}

/// Actuator and sensor state at the moment an image was captured.
///
/// Sensor values are `None` until the first reading at or before the image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CorrelatedFrame {
    pub timestamp: NaiveDateTime,
    pub file_path: String,
    pub hum_outlet: bool,
    pub heat_outlet: bool,
    pub fan_outlet: bool,
    pub light_outlet: bool,
    pub rh_value: Option<String>,
    pub temp_value: Option<String>,
    pub co2_value: Option<String>,
}

/// Any of the three parsed records, merged into one timeline.
#[derive(Debug, Clone, Copy)]
pub enum TimelineEvent<'a> {
    Image(&'a ImageEvent),
    Actuator(&'a ActuatorStateChange),
    Reading(&'a SensorReading),
}

impl TimelineEvent<'_> {
    pub fn timestamp(&self) -> NaiveDateTime {
        match self {
            Self::Image(e) => e.timestamp,
            Self::Actuator(e) => e.timestamp,
            Self::Reading(e) => e.timestamp,
        }
    }
}
