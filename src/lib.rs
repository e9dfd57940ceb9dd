//! Tetris drop simulator (workspace facade crate).
//!
//! This package exposes the `tetris_drop::{core,batch,term,types}` public API while the
//! implementation lives in dedicated crates under `crates/`.

pub use tetris_drop_batch as batch;
pub use tetris_drop_core as core;
pub use tetris_drop_term as term;
pub use tetris_drop_types as types;
