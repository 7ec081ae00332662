//! Text format for the persisted battle state.
//!
//! ```text
//! WINS A:3 B:5 DAYS:2 RECORD:17
//! AAABB
//! AAAAB
//! AAABB
//! AABBB
//! ABBBB
//! AABBB
//! ```
//!
//! Line 1 holds the counters, the next six lines the grid rows. The file is
//! meant to be readable and hand-editable, so `load` never fails: anything
//! it cannot make sense of is replaced by the initial state.

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;

use crate::core::grid::is_prefix_row;
use crate::core::{BattleState, Counters, Faction, Grid, Row, COLS, ROWS};
use crate::error::BattleError;

/// Leading token of the counter line.
pub const WINS_TAG: &str = "WINS";

/// Why a state text was rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("expected at least {expected} lines, found {found}")]
    TooFewLines { expected: usize, found: usize },

    #[error("counter line must start with {tag}", tag = WINS_TAG)]
    MissingWinsTag,

    #[error("malformed counter token {0:?}")]
    BadToken(String),

    #[error("unknown counter {0:?}")]
    UnknownCounter(String),

    #[error("counter {0} appears twice")]
    DuplicateCounter(String),

    #[error("missing counter {0}")]
    MissingCounter(&'static str),

    #[error("row {row} is {width} cells wide, expected {expected}", expected = COLS)]
    BadRowWidth { row: usize, width: usize },

    #[error("row {row} contains invalid cell {cell:?}")]
    BadCell { row: usize, cell: char },

    #[error("row {row} has B-cells before its last A-cell")]
    NotPrefix { row: usize },
}

/// Render the canonical file contents. Every line ends with a newline.
#[must_use]
pub fn format(state: &BattleState) -> String {
    let counters = &state.counters;
    let mut out = format!(
        "{WINS_TAG} A:{} B:{} DAYS:{} RECORD:{}\n",
        counters.wins[Faction::A],
        counters.wins[Faction::B],
        counters.days,
        counters.record
    );
    for row in 0..ROWS {
        out.push_str(&state.grid.row_string(row));
        out.push('\n');
    }
    out
}

/// Parse file contents strictly.
///
/// Lines after the grid are ignored. `DAYS` and `RECORD` default to zero
/// when absent; `A` and `B` are required.
pub fn parse(text: &str) -> Result<BattleState, ParseError> {
    let lines: Vec<&str> = text.lines().collect();
    if lines.len() < 1 + ROWS {
        return Err(ParseError::TooFewLines {
            expected: 1 + ROWS,
            found: lines.len(),
        });
    }

    let counters = parse_counters(lines[0])?;

    let mut rows = [[Faction::B; COLS]; ROWS];
    for (index, (row, line)) in rows.iter_mut().zip(&lines[1..=ROWS]).enumerate() {
        *row = parse_row(index, line)?;
    }

    Ok(BattleState::new(counters, Grid::from_rows(rows)))
}

fn parse_counters(line: &str) -> Result<Counters, ParseError> {
    let mut tokens = line.split_whitespace();
    if tokens.next() != Some(WINS_TAG) {
        return Err(ParseError::MissingWinsTag);
    }

    let mut seen = HashSet::new();
    let (mut a, mut b, mut days, mut record) = (None, None, None, None);

    for token in tokens {
        let (key, value) = token
            .split_once(':')
            .ok_or_else(|| ParseError::BadToken(token.to_string()))?;
        let value: u32 = value
            .parse()
            .map_err(|_| ParseError::BadToken(token.to_string()))?;

        if !seen.insert(key) {
            return Err(ParseError::DuplicateCounter(key.to_string()));
        }
        let slot = match key {
            "A" => &mut a,
            "B" => &mut b,
            "DAYS" => &mut days,
            "RECORD" => &mut record,
            _ => return Err(ParseError::UnknownCounter(key.to_string())),
        };
        *slot = Some(value);
    }

    Ok(Counters::new(
        a.ok_or(ParseError::MissingCounter("A"))?,
        b.ok_or(ParseError::MissingCounter("B"))?,
        days.unwrap_or(0),
        record.unwrap_or(0),
    ))
}

fn parse_row(index: usize, line: &str) -> Result<Row, ParseError> {
    let width = line.chars().count();
    if width != COLS {
        return Err(ParseError::BadRowWidth { row: index, width });
    }

    let mut row = [Faction::B; COLS];
    for (cell, c) in row.iter_mut().zip(line.chars()) {
        *cell = Faction::from_symbol(c).ok_or(ParseError::BadCell { row: index, cell: c })?;
    }
    if !is_prefix_row(&row) {
        return Err(ParseError::NotPrefix { row: index });
    }
    Ok(row)
}

/// Load state from `path`, falling back to the initial state.
///
/// A missing file is the normal first run. An unreadable or malformed file
/// is logged and discarded.
pub fn load(path: &Path) -> BattleState {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            log::info!("no state at {}, starting a new battle", path.display());
            return BattleState::initial();
        }
        Err(err) => {
            log::warn!("cannot read {}: {err}; starting over", path.display());
            return BattleState::initial();
        }
    };

    match parse(&text) {
        Ok(state) => state,
        Err(err) => {
            log::warn!("discarding corrupt state in {}: {err}", path.display());
            BattleState::initial()
        }
    }
}

/// Overwrite `path` with the canonical encoding of `state`.
pub fn save(path: &Path, state: &BattleState) -> Result<(), BattleError> {
    fs::write(path, format(state)).map_err(|source| BattleError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("state saved to {}", path.display());
    Ok(())
}
