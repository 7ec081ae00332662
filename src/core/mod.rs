//! Core types: factions, the grid, counters, RNG, configuration.
//!
//! Everything here is plain data with no I/O. Persistence lives in
//! `store`, the transition rule in `rules`.

pub mod faction;
pub mod grid;
pub mod state;
pub mod rng;
pub mod config;

pub use faction::{Faction, FactionMap};
pub use grid::{Grid, Row, COLS, LAST_COLUMN, NO_A_CELLS, ROWS};
pub use state::{BattleState, Counters};
pub use rng::GameRng;
pub use config::{BattleConfig, ImageConfig, Rgb};
