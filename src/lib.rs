//! # grid-battle
//!
//! A once-a-day battle between two factions on a 6×5 grid.
//!
//! Each invocation picks one row at random. If a faction already holds the
//! whole row, it wins the battle and the grid resets; otherwise a coin flip
//! moves that row's front line one cell. State lives in a small text file
//! between invocations, the board is rendered as box-drawn text, and a
//! separate tool rasterizes that text to PNG.
//!
//! ## Modules
//!
//! - `core`: factions, grid, counters, RNG, configuration
//! - `rules`: the step transition
//! - `store`: the state file format
//! - `render`: box-drawn board text and step reports
//! - `export`: bitmap font and PNG export
//! - `runner`: one load → step → save invocation

pub mod core;
pub mod error;
pub mod rules;
pub mod store;
pub mod render;
pub mod export;
pub mod runner;

// Re-export commonly used types
pub use crate::core::{
    BattleConfig, BattleState, Counters, Faction, FactionMap, GameRng, Grid,
    ImageConfig, Row, COLS, LAST_COLUMN, NO_A_CELLS, ROWS,
};

pub use crate::error::{BattleError, ExportError};

pub use crate::rules::{resolve_row, step, StepOutcome};

pub use crate::store::ParseError;

pub use crate::render::{render_board, render_state, report};

pub use crate::export::{export_file, text_to_image};

pub use crate::runner::{run, run_with_rng, StepReport};
