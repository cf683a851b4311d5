use crate::event::SensorReading;
use crate::parse::ParseError;
use crate::window::TimeWindow;
use chrono::NaiveDateTime;
use tracing::debug;

const AIR_TIMESTAMP_FORMAT: &str = "%d %b %Y %H:%M:%S";

/// Payload fields in log order: CO2, temperature, relative humidity.
const FIELD_UNITS: [&str; 3] = ["ppm", "°C", "%"];

/// Parses the air-quality log into readings sorted by timestamp.
///
/// Readings outside `window` are dropped (bounds inclusive) before their
/// payload is looked at. Any line without a valid timestamp, and any line
/// inside the window without three `label: value<unit>` fields, fails the
/// whole parse.
pub fn parse_air_log(text: &str, window: &TimeWindow) -> Result<Vec<SensorReading>, ParseError> {
    let mut readings = Vec::new();
    let mut outside_window = 0usize;

    for (idx, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let line_no = idx + 1;
        let (timestamp, payload) = split_timestamp(line_no, line)?;

        // Out-of-window payloads are never inspected.
        if !window.contains(timestamp) {
            outside_window += 1;
            continue;
        }

        readings.push(parse_payload(line_no, line, timestamp, payload)?);
    }

    readings.sort_by_key(|r| r.timestamp);

    debug!(count = readings.len(), outside_window, "parsed air log");

    Ok(readings)
}

fn split_timestamp(
    line_no: usize,
    line: &str,
) -> Result<(NaiveDateTime, Option<&str>), ParseError> {
    let mut parts = line.splitn(5, ' ');

    let date_str = parts.by_ref().take(4).collect::<Vec<_>>().join(" ");
    let timestamp = NaiveDateTime::parse_from_str(&date_str, AIR_TIMESTAMP_FORMAT)
        .map_err(|e| ParseError::timestamp(line_no, line, e))?;

    Ok((timestamp, parts.next()))
}

fn parse_payload(
    line_no: usize,
    line: &str,
    timestamp: NaiveDateTime,
    payload: Option<&str>,
) -> Result<SensorReading, ParseError> {
    let payload = payload.ok_or_else(|| ParseError::reading(line_no, line, "missing payload"))?;

    let fields: Vec<&str> = payload.split(',').collect();
    let [co2, temp, rh] = fields.as_slice() else {
        return Err(ParseError::reading(
            line_no,
            line,
            "expected three comma-separated fields",
        ));
    };

    Ok(SensorReading {
        timestamp,
        co2_ppm: field_value(line_no, line, co2, FIELD_UNITS[0])?,
        temp_degc: field_value(line_no, line, temp, FIELD_UNITS[1])?,
        rh_pct: field_value(line_no, line, rh, FIELD_UNITS[2])?,
    })
}

/// `" temp: 23.73°C"` -> `"23.73"`
fn field_value(line_no: usize, line: &str, field: &str, unit: &str) -> Result<String, ParseError> {
    let (_, value) = field
        .split_once(": ")
        .ok_or_else(|| ParseError::reading(line_no, line, "field is not `label: value`"))?;

    let value = value.trim();
    Ok(value.strip_suffix(unit).unwrap_or(value).to_string())
}
