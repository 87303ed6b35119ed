//! CLI argument parsing using clap.
//!
//! Contains the Cli struct and the Commands enum. Running without a
//! subcommand prints the integration test banner and nothing else.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Sale record aggregation tool
#[derive(Parser)]
#[command(name = "duck-tails")]
#[command(version)]
#[command(about = "Sums the `amount` field across a collection of sale records")]
pub struct Cli {
    /// Path to a custom settings.toml file
    #[arg(short, long, global = true, value_name = "CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Sum sale records read from FILE, or stdin when omitted
    Total {
        /// JSON file holding an array of sale records
        file: Option<PathBuf>,
    },

    /// Create a default configuration file
    Init {
        /// Force overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },

    /// Show current configuration
    Config,
}
