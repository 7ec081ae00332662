//! Battle state: counters plus the grid.
//!
//! ## Counters
//!
//! - Win tallies per faction
//! - Current battle length in days
//! - Longest battle on record
//!
//! ## BattleState
//!
//! Everything that survives between invocations. It is passed by value
//! through load → step → save; nothing is kept in globals.

use serde::{Deserialize, Serialize};

use super::faction::{Faction, FactionMap};
use super::grid::Grid;

/// Win tallies and day counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Counters {
    /// Battles won per faction.
    pub wins: FactionMap<u32>,

    /// Days elapsed in the current battle.
    pub days: u32,

    /// Longest battle seen so far, in days.
    pub record: u32,
}

impl Counters {
    /// Create counters from explicit values.
    #[must_use]
    pub const fn new(a_wins: u32, b_wins: u32, days: u32, record: u32) -> Self {
        Self {
            wins: FactionMap::new(a_wins, b_wins),
            days,
            record,
        }
    }

    /// Count one more day of fighting and raise the record if it was beaten.
    pub fn advance_day(&mut self) {
        self.days = self.days.saturating_add(1);
        if self.days > self.record {
            self.record = self.days;
        }
    }

    /// Credit a battle to `winner` and start a new one.
    ///
    /// The record is kept; only the running day count resets.
    pub fn record_win(&mut self, winner: Faction) {
        self.wins[winner] = self.wins[winner].saturating_add(1);
        self.days = 0;
    }
}

/// Complete persisted state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BattleState {
    pub counters: Counters,
    pub grid: Grid,
}

impl BattleState {
    /// Create a state from its parts.
    #[must_use]
    pub const fn new(counters: Counters, grid: Grid) -> Self {
        Self { counters, grid }
    }

    /// Zero counters and the initial grid.
    #[must_use]
    pub fn initial() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_day_raises_record() {
        let mut counters = Counters::new(0, 0, 4, 5);

        counters.advance_day();
        assert_eq!((counters.days, counters.record), (5, 5));

        counters.advance_day();
        assert_eq!((counters.days, counters.record), (6, 6));
    }

    #[test]
    fn test_advance_day_below_record() {
        let mut counters = Counters::new(0, 0, 1, 10);
        counters.advance_day();
        assert_eq!((counters.days, counters.record), (2, 10));
    }

    #[test]
    fn test_record_win() {
        let mut counters = Counters::new(2, 3, 7, 9);
        counters.record_win(Faction::B);

        assert_eq!(counters.wins[Faction::A], 2);
        assert_eq!(counters.wins[Faction::B], 4);
        assert_eq!(counters.days, 0);
        assert_eq!(counters.record, 9);
    }

    #[test]
    fn test_initial_state() {
        let state = BattleState::initial();
        assert_eq!(state.counters, Counters::new(0, 0, 0, 0));
        assert_eq!(state.grid, Grid::initial());
    }

    #[test]
    fn test_state_serde() {
        let state = BattleState::new(Counters::new(1, 2, 3, 4), Grid::initial());
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: BattleState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
