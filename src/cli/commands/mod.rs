//! Command implementations for the CLI.
//!
//! Each command is implemented in its own module.

pub mod banner;
pub mod config;
pub mod init;
pub mod total;
