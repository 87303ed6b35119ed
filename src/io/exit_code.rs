//! Unix exit codes for the CLI boundary.

/// Exit codes the binary can terminate with.
///
/// `DataError` and `IoError` follow the BSD sysexits values; `NotFound`
/// is kept distinct from `GeneralError` so callers can tell missing
/// input apart from bad input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Command completed
    Success = 0,
    /// Unclassified failure
    GeneralError = 1,
    /// The requested input does not exist
    NotFound = 3,
    /// Input was read but is malformed or violates the record contract
    DataError = 65,
    /// Input could not be read at all
    IoError = 74,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code as i32
    }
}
