//! Battle rules.
//!
//! `step` is the only thing that changes a `BattleState`:
//! - a decided row ends the battle and resets the grid
//! - a contested row moves its front line one cell
//!
//! Rules never touch the filesystem.

pub mod engine;

pub use engine::{resolve_row, step, StepOutcome};
