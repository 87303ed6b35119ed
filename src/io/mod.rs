//! Process-boundary plumbing for the CLI.
//!
//! Failures stay typed until they reach a command's outer edge; here they
//! become Unix exit codes.

pub mod exit_code;

pub use exit_code::ExitCode;
