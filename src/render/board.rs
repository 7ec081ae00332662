//! Box-drawn text rendering of the board.
//!
//! ```text
//! Wins - A: 0 | B: 0
//! Days: 0   Record: 0
//!
//!
//! ┌─────┬─────┬─────┬─────┬─────┐
//! │  A  │  A  │  A  │  B  │  B  │
//! ├─────┼─────┼─────┼─────┼─────┤
//! ...
//! └─────┴─────┴─────┴─────┴─────┘
//! ```

use crate::core::{BattleState, Counters, Faction, Grid, COLS};
use crate::rules::StepOutcome;

/// Inner width of a cell, in characters.
pub const CELL_WIDTH: usize = 5;

/// Render counters and grid as a box-drawn table. No trailing newline.
#[must_use]
pub fn render_board(counters: &Counters, grid: &Grid) -> String {
    let header = format!(
        "Wins - A: {} | B: {}\nDays: {}   Record: {}\n\n",
        counters.wins[Faction::A],
        counters.wins[Faction::B],
        counters.days,
        counters.record
    );

    let mut lines = vec![header, border('┌', '┬', '┐')];
    let rows = grid.rows();
    for (index, row) in rows.iter().enumerate() {
        let cells: Vec<String> = row.iter().map(|cell| center(cell.symbol())).collect();
        lines.push(format!("│{}│", cells.join("│")));
        if index + 1 < rows.len() {
            lines.push(border('├', '┼', '┤'));
        }
    }
    lines.push(border('└', '┴', '┘'));

    lines.join("\n")
}

/// Render a whole state.
#[must_use]
pub fn render_state(state: &BattleState) -> String {
    render_board(&state.counters, &state.grid)
}

/// The text printed and written to the board file after a step.
///
/// An ordinary day shows the updated board. A win shows the announcement,
/// the board as it stood, and the fresh board with updated tallies.
#[must_use]
pub fn report(outcome: &StepOutcome, state: &BattleState) -> String {
    match outcome {
        StepOutcome::Advanced { .. } => render_state(state),
        StepOutcome::Won {
            row,
            winner,
            final_state,
        } => format!(
            "Faction {winner} wins on row {}!\n\nFinal board state:\n{}\n\nBoard reset to initial state:\n{}",
            row + 1,
            render_state(final_state),
            render_state(state)
        ),
    }
}

fn border(left: char, joint: char, right: char) -> String {
    let segment = "─".repeat(CELL_WIDTH);
    let inner = vec![segment; COLS].join(&joint.to_string());
    format!("{left}{inner}{right}")
}

fn center(symbol: char) -> String {
    format!("{symbol:^width$}", width = CELL_WIDTH)
}
