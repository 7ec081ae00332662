//! Persistence of the battle state between invocations.

pub mod state_file;

pub use state_file::{format, load, parse, save, ParseError, WINS_TAG};
