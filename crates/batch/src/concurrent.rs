//! Concurrent line processing.
//!
//! Lines are independent simulations, so they can run side by side on tokio's
//! blocking pool. Each task owns its own grid; results come back in input order
//! no matter which task finishes first.

use anyhow::{Context, Result};
use tokio::runtime::Builder;
use tokio::task;

use crate::record::LineOutcome;
use crate::runner::process_raw_line;

/// Simulate every raw line on the blocking pool of the current runtime
pub async fn process_lines(lines: Vec<Vec<u8>>) -> Result<Vec<LineOutcome>> {
    let handles: Vec<_> = lines
        .into_iter()
        .enumerate()
        .map(|(idx, raw)| task::spawn_blocking(move || process_raw_line(idx + 1, &raw)))
        .collect();

    let mut outcomes = Vec::with_capacity(handles.len());
    for (idx, handle) in handles.into_iter().enumerate() {
        let outcome = handle
            .await
            .with_context(|| format!("simulation task for line {} failed", idx + 1))?;
        outcomes.push(outcome);
    }
    Ok(outcomes)
}

/// Build a dedicated runtime capped at `jobs` blocking threads and process `lines` on it
pub fn process_lines_blocking(lines: Vec<Vec<u8>>, jobs: usize) -> Result<Vec<LineOutcome>> {
    let rt = Builder::new_current_thread()
        .max_blocking_threads(jobs.max(1))
        .build()
        .context("failed to create tokio runtime")?;

    rt.block_on(process_lines(lines))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcomes_follow_input_order() {
        let lines: Vec<Vec<u8>> = ["L0,J8", "Q0,Q2,Q4,Q6,Q8", "I0,I0", "Z7"]
            .iter()
            .map(|s| s.as_bytes().to_vec())
            .collect();

        let outcomes = tokio_test::block_on(process_lines(lines)).unwrap();

        let numbers: Vec<usize> = outcomes.iter().map(|o| o.line).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4]);

        let heights: Vec<Option<usize>> = outcomes
            .iter()
            .map(|o| o.result.as_ref().ok().map(|sim| sim.height()))
            .collect();
        assert_eq!(heights, vec![Some(3), Some(0), Some(2), Some(2)]);
    }

    #[test]
    fn invalid_utf8_fails_only_its_line() {
        let lines = vec![b"Q0".to_vec(), b"\xfe\xff".to_vec(), b"I0,I4".to_vec()];
        let outcomes = process_lines_blocking(lines, 2).unwrap();

        assert_eq!(outcomes.len(), 3);
        assert!(outcomes[0].result.is_ok());
        assert!(outcomes[1].result.is_err());
        assert_eq!(outcomes[2].result.as_ref().map(|sim| sim.height()).ok(), Some(1));
    }

    #[test]
    fn no_lines_no_outcomes() {
        let outcomes = process_lines_blocking(Vec::new(), 4).unwrap();
        assert!(outcomes.is_empty());
    }
}
