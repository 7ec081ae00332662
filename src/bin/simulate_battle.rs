//! Run one battle step and print the board.
//!
//! Files default to the working directory; see `BattleConfig::from_env`
//! for the `BATTLE_*` overrides.

use std::process::ExitCode;

use grid_battle::{run, BattleConfig};

fn main() -> ExitCode {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("warn"));

    let config = BattleConfig::from_env();
    match run(&config) {
        Ok(report) => {
            println!("{}", report.text);
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
