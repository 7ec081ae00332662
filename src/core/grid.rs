//! The battle grid: a fixed 6×5 matrix of faction cells.
//!
//! Each row is a front line. Faction A holds a contiguous prefix of the
//! row and faction B the remaining suffix, so a whole row is described by a
//! single **boundary**: the index of its last A-cell, or `-1` when B holds
//! the entire row.

use serde::{Deserialize, Serialize};

use super::faction::Faction;

/// Number of rows on the board.
pub const ROWS: usize = 6;

/// Number of cells per row.
pub const COLS: usize = 5;

/// Boundary value of a row held entirely by faction A.
pub const LAST_COLUMN: i32 = COLS as i32 - 1;

/// Boundary value of a row held entirely by faction B.
pub const NO_A_CELLS: i32 = -1;

/// A single row of cells.
pub type Row = [Faction; COLS];

/// The battle grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Grid {
    rows: [Row; ROWS],
}

impl Grid {
    /// Build a grid from explicit rows.
    ///
    /// The rows are taken as given; callers reading untrusted input check
    /// them with [`is_prefix_row`] first.
    #[must_use]
    pub const fn from_rows(rows: [Row; ROWS]) -> Self {
        Self { rows }
    }

    /// The starting grid.
    ///
    /// The top half favours A (3 A-cells, 2 B-cells per row), the bottom
    /// half favours B (2 A-cells, 3 B-cells).
    #[must_use]
    pub fn initial() -> Self {
        let mut rows = [[Faction::B; COLS]; ROWS];
        for (index, row) in rows.iter_mut().enumerate() {
            let a_cells = if index < ROWS / 2 { 3 } else { COLS - 3 };
            *row = row_with_boundary(a_cells as i32 - 1);
        }
        Self { rows }
    }

    /// All rows, top to bottom.
    #[must_use]
    pub fn rows(&self) -> &[Row; ROWS] {
        &self.rows
    }

    /// A single row.
    ///
    /// # Panics
    ///
    /// Panics if `index >= ROWS`.
    #[must_use]
    pub fn row(&self, index: usize) -> &Row {
        &self.rows[index]
    }

    /// Boundary of a row: index of its last A-cell, or `-1`.
    #[must_use]
    pub fn boundary(&self, index: usize) -> i32 {
        row_boundary(&self.rows[index])
    }

    /// Rewrite a row so that cells up to and including `boundary` are A and
    /// the rest are B. The boundary is clamped to `[-1, LAST_COLUMN]`.
    pub fn set_boundary(&mut self, index: usize, boundary: i32) {
        self.rows[index] = row_with_boundary(boundary);
    }

    /// Move a row's boundary one step toward the opponent of `pusher`.
    ///
    /// A pushes the boundary right (+1), B pushes it left (−1). The result
    /// is clamped to `[-1, LAST_COLUMN]`. Returns the new boundary.
    pub fn push(&mut self, index: usize, pusher: Faction) -> i32 {
        let delta = match pusher {
            Faction::A => 1,
            Faction::B => -1,
        };
        let boundary = clamp_boundary(self.boundary(index) + delta);
        self.set_boundary(index, boundary);
        boundary
    }

    /// The row as text, e.g. `"AAABB"`.
    #[must_use]
    pub fn row_string(&self, index: usize) -> String {
        self.rows[index].iter().map(|cell| cell.symbol()).collect()
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::initial()
    }
}

/// Index of the last A-cell in a row, or `-1` if there is none.
#[must_use]
pub fn row_boundary(row: &Row) -> i32 {
    row.iter()
        .rposition(|&cell| cell == Faction::A)
        .map_or(NO_A_CELLS, |i| i as i32)
}

/// Check that the row's A-cells form a prefix and its B-cells the suffix.
#[must_use]
pub fn is_prefix_row(row: &Row) -> bool {
    *row == row_with_boundary(row_boundary(row))
}

/// Check whether every cell in the row belongs to the same faction.
#[must_use]
pub fn is_row_uniform(row: &Row) -> bool {
    row.iter().all(|&cell| cell == row[0])
}

/// The faction holding the whole row, if any.
///
/// This is the win test: a boundary at either edge.
#[must_use]
pub fn row_winner(row: &Row) -> Option<Faction> {
    match row_boundary(row) {
        LAST_COLUMN => Some(Faction::A),
        NO_A_CELLS => Some(Faction::B),
        _ => None,
    }
}

/// Build a well-formed row from a boundary, clamping it first.
#[must_use]
pub fn row_with_boundary(boundary: i32) -> Row {
    let boundary = clamp_boundary(boundary);
    std::array::from_fn(|i| if (i as i32) <= boundary { Faction::A } else { Faction::B })
}

fn clamp_boundary(boundary: i32) -> i32 {
    boundary.clamp(NO_A_CELLS, LAST_COLUMN)
}
