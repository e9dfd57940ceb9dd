//! Terminal grid rendering.
//!
//! A small presentation layer for inspecting simulation results:
//! [`GridView`] lays a grid out as plain text and [`GridPrinter`] writes it to
//! a terminal stream with crossterm styling.
//!
//! Goals:
//! - Keep `core` free of any presentation concerns
//! - Keep layout pure so it can be tested without a terminal

pub mod printer;
pub mod view;

pub use tetris_drop_core as core;
pub use tetris_drop_types as types;

pub use printer::{encode_grid_into, GridPrinter, BLOCK_COLOR, FRAME_COLOR};
pub use view::{GridView, BLOCK};
