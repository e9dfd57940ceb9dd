//! Batch configuration
//!
//! Defaults can be overridden through environment variables:
//!
//! - `TETRIS_DROP_FORMAT`: `text` (default) or `json`
//! - `TETRIS_DROP_JOBS`: number of lines simulated concurrently (default 1)
//! - `TETRIS_DROP_PRINT_GRID`: set to "1" or "true" to render each final grid

use crate::record::OutputFormat;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchConfig {
    pub format: OutputFormat,
    /// Lines simulated concurrently; 1 streams lines one at a time
    pub jobs: usize,
    pub print_grid: bool,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            jobs: 1,
            print_grid: false,
        }
    }
}

impl BatchConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary key lookup; unset or unparsable values keep
    /// their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let format = lookup("TETRIS_DROP_FORMAT")
            .and_then(|s| OutputFormat::from_str(&s))
            .unwrap_or(defaults.format);

        let jobs = lookup("TETRIS_DROP_JOBS")
            .and_then(|s| s.trim().parse::<usize>().ok())
            .filter(|&n| n > 0)
            .unwrap_or(defaults.jobs);

        let print_grid = lookup("TETRIS_DROP_PRINT_GRID")
            .map(|s| matches!(s.trim().to_lowercase().as_str(), "1" | "true"))
            .unwrap_or(defaults.print_grid);

        Self {
            format,
            jobs,
            print_grid,
        }
    }
}
