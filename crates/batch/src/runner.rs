//! Batch runner - one simulation per input line, one result per output line
//!
//! Every line starts from an empty grid. A line that fails to parse produces an
//! error result in its slot and processing continues with the next line. That
//! includes lines that are not valid UTF-8; only real I/O failures stop a batch.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use log::{debug, info, warn};

use crate::concurrent::process_lines_blocking;
use crate::config::BatchConfig;
use crate::core::{run, SimulationError};
use crate::parse::{parse_line, TOKEN_SEPARATOR};
use crate::record::{format_outcome, LineOutcome};

/// Totals for a finished batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BatchSummary {
    pub lines: usize,
    pub failed: usize,
}

impl BatchSummary {
    pub fn all_ok(&self) -> bool {
        self.failed == 0
    }
}

/// Parse and simulate a single line (`line` is 1-based, for reporting)
pub fn process_line(line: usize, text: &str) -> LineOutcome {
    let result = parse_line(text).map(|pieces| run(&pieces));
    LineOutcome { line, result }
}

/// Like [`process_line`] for an undecoded line. Invalid UTF-8 fails the line
/// with `MalformedToken`, naming the first token that contains it.
pub fn process_raw_line(line: usize, raw: &[u8]) -> LineOutcome {
    match std::str::from_utf8(raw) {
        Ok(text) => process_line(line, text),
        Err(_) => {
            let lossy = String::from_utf8_lossy(raw);
            let token = lossy
                .split(TOKEN_SEPARATOR)
                .find(|t| t.contains(char::REPLACEMENT_CHARACTER))
                .unwrap_or(lossy.as_ref())
                .trim()
                .to_string();
            LineOutcome {
                line,
                result: Err(SimulationError::MalformedToken { token }),
            }
        }
    }
}

/// Split `input` on `\n` without decoding, dropping a trailing `\r`
fn raw_lines<R: BufRead>(input: R) -> impl Iterator<Item = io::Result<Vec<u8>>> {
    input.split(b'\n').map(|line| {
        line.map(|mut bytes| {
            if bytes.last() == Some(&b'\r') {
                bytes.pop();
            }
            bytes
        })
    })
}

/// Run every line of `input` and write one result line per input line to `output`
pub fn run_batch<R: BufRead, W: Write>(
    input: R,
    output: W,
    config: &BatchConfig,
) -> Result<BatchSummary> {
    run_batch_with(input, output, config, |_| Ok(()))
}

/// Like [`run_batch`], calling `inspect` on each outcome after its line is written
pub fn run_batch_with<R, W, F>(
    input: R,
    mut output: W,
    config: &BatchConfig,
    mut inspect: F,
) -> Result<BatchSummary>
where
    R: BufRead,
    W: Write,
    F: FnMut(&LineOutcome) -> Result<()>,
{
    let mut summary = BatchSummary::default();

    let mut emit = |outcome: LineOutcome| -> Result<()> {
        tally(&mut summary, &outcome);
        let rendered = format_outcome(&outcome, config.format)?;
        writeln!(output, "{rendered}").context("failed to write result line")?;
        inspect(&outcome)
    };

    if config.jobs > 1 {
        let lines = raw_lines(input)
            .collect::<io::Result<Vec<Vec<u8>>>>()
            .context("failed to read input")?;
        debug!("simulating {} lines with {} jobs", lines.len(), config.jobs);

        for outcome in process_lines_blocking(lines, config.jobs)? {
            emit(outcome)?;
        }
    } else {
        for (idx, raw) in raw_lines(input).enumerate() {
            let raw = raw.with_context(|| format!("failed to read input line {}", idx + 1))?;
            emit(process_raw_line(idx + 1, &raw))?;
        }
    }

    output.flush().context("failed to flush output")?;
    info!(
        "processed {} lines ({} failed)",
        summary.lines, summary.failed
    );
    Ok(summary)
}

fn tally(summary: &mut BatchSummary, outcome: &LineOutcome) {
    summary.lines += 1;
    match &outcome.result {
        Ok(sim) => debug!("line {}: height {}", outcome.line, sim.height()),
        Err(err) => {
            summary.failed += 1;
            warn!("line {}: {} ({})", outcome.line, err, err.code());
        }
    }
}
