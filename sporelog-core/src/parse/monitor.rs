use crate::event::{ActuatorStateChange, ImageEvent};
use crate::parse::ParseError;
use crate::window::TimeWindow;
use chrono::NaiveDateTime;
use serde::Serialize;
use tracing::debug;

const MONITOR_TIMESTAMP_FORMAT: &str = "%d-%b-%Y %H:%M:%S%.f";

const CAPTURE_MARKER: &str = "Capturing";

/// Shortest relay line: `<measure> is <level> (<reading> <cmp> <threshold>), turning <state> <device>`
/// after the timestamp and level tokens.
const MIN_STATE_CHANGE_TOKENS: usize = 9;

/// Events recovered from the monitor log, each list sorted by timestamp.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MonitorLog {
    pub images: Vec<ImageEvent>,
    pub actions: Vec<ActuatorStateChange>,
}

enum MonitorLine {
    Capture(ImageEvent),
    StateChange(ActuatorStateChange),
    Other,
}

/// Parses the monitor log into image captures and relay state changes.
///
/// Lines inside `window` that are neither captures nor relay switches are
/// skipped without error; the log carries plenty of register debug output.
pub fn parse_monitor_log(text: &str, window: &TimeWindow) -> Result<MonitorLog, ParseError> {
    let mut log = MonitorLog::default();
    let mut ignored = 0usize;

    for (idx, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        // The service sometimes double-spaces fields; tokenizing on any run of
        // whitespace collapses them.
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let line_no = idx + 1;

        let timestamp = parse_timestamp(&tokens)
            .map_err(|e| ParseError::timestamp(line_no, line, e))?;

        if !window.contains(timestamp) {
            continue;
        }

        match classify(timestamp, tokens, line_no, line)? {
            MonitorLine::Capture(image) => log.images.push(image),
            MonitorLine::StateChange(change) => log.actions.push(change),
            MonitorLine::Other => ignored += 1,
        }
    }

    log.images.sort_by_key(|e| e.timestamp);
    log.actions.sort_by_key(|e| e.timestamp);

    debug!(
        images = log.images.len(),
        actions = log.actions.len(),
        ignored,
        "parsed monitor log"
    );

    Ok(log)
}

fn parse_timestamp(tokens: &[&str]) -> Result<NaiveDateTime, chrono::ParseError> {
    let date_str = tokens.iter().take(2).copied().collect::<Vec<_>>().join(" ");
    NaiveDateTime::parse_from_str(&date_str, MONITOR_TIMESTAMP_FORMAT)
}

fn classify(
    timestamp: NaiveDateTime,
    mut tokens: Vec<&str>,
    line_no: usize,
    line: &str,
) -> Result<MonitorLine, ParseError> {
    if tokens.get(3) == Some(&CAPTURE_MARKER) {
        let Some(path) = tokens.get(4) else {
            return Err(ParseError::MissingImagePath {
                line_no,
                line: line.to_string(),
            });
        };

        return Ok(MonitorLine::Capture(ImageEvent {
            timestamp,
            file_path: (*path).to_string(),
        }));
    }

    if tokens.len() < MIN_STATE_CHANGE_TOKENS
        || !tokens.contains(&"is")
        || !tokens.contains(&"turning")
    {
        return Ok(MonitorLine::Other);
    }

    // The light controller logs `NIGHT ... turning ON` when it is actually
    // switching the lights off.
    if tokens.contains(&"NIGHT") {
        if let Some(pos) = tokens.iter().position(|t| *t == "ON") {
            tokens[pos] = "OFF";
        }
    }

    let device = tokens
        .last()
        .map(|t| t.trim_matches(|c| c == '(' || c == ')').to_lowercase())
        .unwrap_or_default();

    Ok(MonitorLine::StateChange(ActuatorStateChange {
        timestamp,
        measure: tokens[3].to_string(),
        state: tokens.contains(&"ON"),
        device,
    }))
}
