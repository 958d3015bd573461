use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MotifError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Ragged PSSM: row {row} has {found} values, expected {expected}")]
    RaggedPssm {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Invalid file format: {0}")]
    InvalidFileFormat(String),
}

/// Type alias for Result with MotifError
pub type Result<T> = std::result::Result<T, MotifError>;

impl MotifError {
    /// Create a new InvalidFileFormat error
    pub fn invalid_file_format(message: impl Into<String>) -> Self {
        MotifError::InvalidFileFormat(message.into())
    }

    /// Create a new RaggedPssm error
    pub fn ragged_pssm(row: usize, expected: usize, found: usize) -> Self {
        MotifError::RaggedPssm {
            row,
            expected,
            found,
        }
    }
}
