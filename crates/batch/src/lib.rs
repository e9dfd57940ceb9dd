//! Batch module - line-oriented driver around the simulation core
//!
//! Reads simulations one line at a time and writes one result per line:
//!
//! ```text
//! input:  Q0,Q2,Q4,Q6,Q8     output: 0
//!         I0,I4                      1
//!         X1                         error: no shape corresponds to 'X'
//! ```
//!
//! Each input line is a comma-separated list of `<ShapeLetter><PositionDigit>`
//! tokens and is simulated from an empty grid. A bad line yields an error
//! result in its own slot; the lines around it are unaffected.
//!
//! # Output Formats
//!
//! - **text**: the height, or `error: <message>`
//! - **json**: `{"line":1,"height":0,"lines_cleared":2,"pieces":5}` or
//!   `{"line":3,"error":{"code":"unknown_shape","message":"..."}}`
//!
//! # Environment Variables
//!
//! - `TETRIS_DROP_FORMAT`: `text` or `json`
//! - `TETRIS_DROP_JOBS`: lines simulated concurrently (default 1)
//! - `TETRIS_DROP_PRINT_GRID`: set to "1" or "true" to render final grids
//!
//! # Example
//!
//! ```
//! use tetris_drop_batch::{run_batch, BatchConfig};
//!
//! let mut out = Vec::new();
//! let summary = run_batch("Q0\nI0,I0\n".as_bytes(), &mut out, &BatchConfig::default()).unwrap();
//!
//! assert_eq!(String::from_utf8(out).unwrap(), "2\n2\n");
//! assert_eq!(summary.lines, 2);
//! ```

pub mod concurrent;
pub mod config;
pub mod parse;
pub mod record;
pub mod runner;

pub use tetris_drop_core as core;
pub use tetris_drop_types as types;

pub use config::BatchConfig;
pub use parse::{parse_line, parse_token};
pub use record::{format_outcome, LineOutcome, LineRecord, OutputFormat};
pub use runner::{process_line, process_raw_line, run_batch, run_batch_with, BatchSummary};
