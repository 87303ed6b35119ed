use clap::Parser;
use tracing::debug;

use duck_tails::cli::{Cli, Commands, commands};
use duck_tails::config::Settings;
use duck_tails::io::ExitCode;
use duck_tails::logging;

fn main() {
    let cli = Cli::parse();

    // An explicit --config that fails to load is a hard error; the
    // discovered workspace config falls back to defaults so the bare
    // invocation works in a pristine checkout.
    let settings = match &cli.config {
        Some(path) => Settings::load_from(path).unwrap_or_else(|e| {
            eprintln!("Configuration error: {e}");
            std::process::exit(i32::from(ExitCode::GeneralError));
        }),
        None => Settings::load().unwrap_or_else(|e| {
            eprintln!("Configuration error: {e}");
            Settings::default()
        }),
    };

    logging::init_with_config(&settings.logging);
    debug!("settings loaded: schema version {}", settings.version);

    let code = match cli.command {
        None => commands::banner::run(),
        Some(Commands::Total { file }) => commands::total::run(file.as_deref()),
        Some(Commands::Init { force }) => commands::init::run(force),
        Some(Commands::Config) => commands::config::run(&settings),
    };

    std::process::exit(i32::from(code));
}
