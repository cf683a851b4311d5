use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("line {line_no}: malformed timestamp: {source}\n  {line}")]
    MalformedTimestamp {
        line_no: usize,
        line: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("line {line_no}: malformed reading ({reason})\n  {line}")]
    MalformedReading {
        line_no: usize,
        line: String,
        reason: &'static str,
    },

    #[error("line {line_no}: capture entry has no image path\n  {line}")]
    MissingImagePath { line_no: usize, line: String },
}

impl ParseError {
    pub fn timestamp(line_no: usize, line: &str, source: chrono::ParseError) -> Self {
        Self::MalformedTimestamp {
            line_no,
            line: line.to_string(),
            source,
        }
    }

    pub fn reading(line_no: usize, line: &str, reason: &'static str) -> Self {
        Self::MalformedReading {
            line_no,
            line: line.to_string(),
            reason,
        }
    }

    pub fn line_no(&self) -> usize {
        match self {
            Self::MalformedTimestamp { line_no, .. }
            | Self::MalformedReading { line_no, .. }
            | Self::MissingImagePath { line_no, .. } => *line_no,
        }
    }
}
