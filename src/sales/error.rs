use crate::io::ExitCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SalesError {
    #[error("record {index} has no `amount` key")]
    MissingAmount { index: usize },

    #[error("record {index} has a non-numeric `amount` (found {found})")]
    InvalidAmount { index: usize, found: &'static str },

    #[error("failed to read sales data: {0}")]
    Io(#[from] std::io::Error),

    #[error("sales data is not a JSON array of records: {0}")]
    Parse(#[from] serde_json::Error),
}

impl SalesError {
    /// Process exit code for this failure at the CLI boundary.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::Io(e) if e.kind() == std::io::ErrorKind::NotFound => ExitCode::NotFound,
            Self::Io(_) => ExitCode::IoError,
            Self::MissingAmount { .. } | Self::InvalidAmount { .. } | Self::Parse(_) => {
                ExitCode::DataError
            }
        }
    }
}

pub type SalesResult<T> = Result<T, SalesError>;
