//! Init command: create the configuration file.

use std::path::PathBuf;

use crate::config::{CONFIG_DIR, Settings};
use crate::io::ExitCode;

/// Create `.ducktails/settings.toml`, refusing to overwrite unless forced.
pub fn run(force: bool) -> ExitCode {
    let config_path = PathBuf::from(CONFIG_DIR).join("settings.toml");

    if config_path.exists() && !force {
        eprintln!(
            "Configuration file already exists at: {}",
            config_path.display()
        );
        eprintln!("Use --force to overwrite");
        return ExitCode::GeneralError;
    }

    match Settings::init_config_file(force) {
        Ok(path) => {
            println!("Created configuration file at: {}", path.display());
            println!("Edit this file to customize your settings.");
            ExitCode::Success
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::GeneralError
        }
    }
}
