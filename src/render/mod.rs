//! Text rendering of the board and step reports.

pub mod board;

pub use board::{render_board, render_state, report, CELL_WIDTH};
