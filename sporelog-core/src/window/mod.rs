use crate::conf::ConfigError;
use chrono::NaiveDateTime;
use serde::Serialize;


/// Format accepted by `--start` / `--end`, e.g. `22-07-2023 14:06:20`.
pub const WINDOW_FORMAT: &str = "%d-%m-%Y %H:%M:%S";

/// Inclusive `[start, end]` filter. Either bound may be open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TimeWindow {
    pub start: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,
}

impl TimeWindow {
    pub fn new(start: Option<NaiveDateTime>, end: Option<NaiveDateTime>) -> Self {
        Self { start, end }
    }

    /// Like [`TimeWindow::new`], but rejects `start > end`.
    pub fn checked(
        start: Option<NaiveDateTime>,
        end: Option<NaiveDateTime>,
    ) -> Result<Self, ConfigError> {
        match (start, end) {
            (Some(s), Some(e)) if s > e => Err(ConfigError::InvalidWindow {
                start: s.to_string(),
                end: e.to_string(),
            }),
            _ => Ok(Self::new(start, end)),
        }
    }

    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn contains(&self, ts: NaiveDateTime) -> bool {
        if self.start.is_some_and(|start| ts < start) {
            return false;
        }
        if self.end.is_some_and(|end| ts > end) {
            return false;
        }
        true
    }
}

/// Parses a `--start` / `--end` value.
pub fn parse_window_bound(s: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    NaiveDateTime::parse_from_str(s.trim(), WINDOW_FORMAT)
}
