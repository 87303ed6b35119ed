//! Banner command: the default action when no subcommand is given.

use std::io::Write;

use crate::io::ExitCode;

/// The one line printed when the binary runs without a subcommand.
pub const BANNER: &str = "Duck Tails Git Integration Test";

/// Write the banner and a trailing newline to `out`.
///
/// Split from the driver so running-as-a-program stays distinct from
/// linking-as-a-library: nothing in the library calls this.
pub fn write_banner(out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "{BANNER}")
}

/// Run the banner command against stdout.
pub fn run() -> ExitCode {
    match write_banner(&mut std::io::stdout()) {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::IoError
        }
    }
}
