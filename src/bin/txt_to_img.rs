//! Convert the board text file to a PNG.
//!
//! A missing board file is reported on stdout and is not a failure: the
//! battle simply has not run yet.

use std::process::ExitCode;

use grid_battle::{export_file, BattleConfig, ExportError, ImageConfig};

fn main() -> ExitCode {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("warn"));

    let config = BattleConfig::from_env();
    match export_file(&config.map_path, &config.image_path, &ImageConfig::default()) {
        Ok(_) => {
            println!("Image saved as {}", config.image_path.display());
            ExitCode::SUCCESS
        }
        Err(err @ ExportError::MissingInput(_)) => {
            println!("{err}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
