//! Output records - one per input line, as plain text or JSON

use anyhow::Result;
use serde::Serialize;

use crate::core::{Simulation, SimulationError};

/// Output encoding for result lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Bare height, or `error: <message>`
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

impl OutputFormat {
    /// Parse format from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }
}

/// Result of processing one input line (1-based `line`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineOutcome {
    pub line: usize,
    pub result: Result<Simulation, SimulationError>,
}

impl LineOutcome {
    pub fn is_err(&self) -> bool {
        self.result.is_err()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorRecord {
    pub code: &'static str,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum LineRecord {
    Height {
        line: usize,
        height: usize,
        lines_cleared: usize,
        pieces: usize,
    },
    Error {
        line: usize,
        error: ErrorRecord,
    },
}

impl From<&LineOutcome> for LineRecord {
    fn from(outcome: &LineOutcome) -> Self {
        match &outcome.result {
            Ok(sim) => LineRecord::Height {
                line: outcome.line,
                height: sim.height(),
                lines_cleared: sim.lines_cleared,
                pieces: sim.pieces_dropped,
            },
            Err(err) => LineRecord::Error {
                line: outcome.line,
                error: ErrorRecord {
                    code: err.code(),
                    message: err.to_string(),
                },
            },
        }
    }
}

/// Render one outcome as a single output line (without the newline)
pub fn format_outcome(outcome: &LineOutcome, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(match &outcome.result {
            Ok(sim) => sim.height().to_string(),
            Err(err) => format!("error: {err}"),
        }),
        OutputFormat::Json => Ok(serde_json::to_string(&LineRecord::from(outcome))?),
    }
}
