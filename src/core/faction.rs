//! Faction identification and per-faction data storage.
//!
//! ## Faction
//!
//! The two sides of the battle. A faction is also what a grid cell holds:
//! every cell belongs to exactly one side.
//!
//! ## FactionMap
//!
//! Fixed two-slot storage indexed by `Faction`, used for win tallies.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One side of the battle.
///
/// Faction A holds the left part of every row, faction B the right part.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Faction {
    A,
    B,
}

impl Faction {
    /// Character used in the state file and the rendered board.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Faction::A => 'A',
            Faction::B => 'B',
        }
    }

    /// Parse a cell character. Only `'A'` and `'B'` are accepted.
    #[must_use]
    pub const fn from_symbol(c: char) -> Option<Self> {
        match c {
            'A' => Some(Faction::A),
            'B' => Some(Faction::B),
            _ => None,
        }
    }

    #[must_use]
    const fn index(self) -> usize {
        match self {
            Faction::A => 0,
            Faction::B => 1,
        }
    }
}

impl std::fmt::Display for Faction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Per-faction data storage.
///
/// ## Example
///
/// ```
/// use grid_battle::core::{Faction, FactionMap};
///
/// let mut wins: FactionMap<u32> = FactionMap::default();
/// wins[Faction::B] += 1;
///
/// assert_eq!(wins[Faction::A], 0);
/// assert_eq!(wins[Faction::B], 1);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FactionMap<T> {
    data: [T; 2],
}

impl<T> FactionMap<T> {
    /// Create a map with one value per faction.
    pub const fn new(a: T, b: T) -> Self {
        Self { data: [a, b] }
    }

    /// Get a reference to a faction's data.
    #[must_use]
    pub fn get(&self, faction: Faction) -> &T {
        &self.data[faction.index()]
    }

    /// Get a mutable reference to a faction's data.
    pub fn get_mut(&mut self, faction: Faction) -> &mut T {
        &mut self.data[faction.index()]
    }
}

impl<T> Index<Faction> for FactionMap<T> {
    type Output = T;

    fn index(&self, faction: Faction) -> &Self::Output {
        self.get(faction)
    }
}

impl<T> IndexMut<Faction> for FactionMap<T> {
    fn index_mut(&mut self, faction: Faction) -> &mut Self::Output {
        self.get_mut(faction)
    }
}
