//! One full battle invocation.
//!
//! Load the saved state (or start fresh), take one step, save, and write
//! the report to the board text file. There is no locking: two invocations
//! racing on the same files leave whichever wrote last.

use std::fs;

use crate::core::{BattleConfig, BattleState, GameRng};
use crate::error::BattleError;
use crate::render;
use crate::rules::{self, StepOutcome};
use crate::store;

/// Everything one invocation produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepReport {
    /// State as saved.
    pub state: BattleState,
    pub outcome: StepOutcome,
    /// Text printed and written to the board file.
    pub text: String,
}

/// Run one step using the configured seed, or OS entropy if none.
pub fn run(config: &BattleConfig) -> Result<StepReport, BattleError> {
    let mut rng = match config.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };
    log::debug!("battle rng seed {}", rng.seed());
    run_with_rng(config, &mut rng)
}

/// Run one step drawing from `rng`.
pub fn run_with_rng(config: &BattleConfig, rng: &mut GameRng) -> Result<StepReport, BattleError> {
    let state = store::load(&config.state_path);
    let (state, outcome) = rules::step(state, rng);

    store::save(&config.state_path, &state)?;

    let text = render::report(&outcome, &state);
    fs::write(&config.map_path, &text).map_err(|source| BattleError::Write {
        path: config.map_path.clone(),
        source,
    })?;

    Ok(StepReport { state, outcome, text })
}
