//! Error types for CSV projection operations

use thiserror::Error;

/// Result type for projector operations
pub type Result<T> = std::result::Result<T, ProjectorError>;

/// Errors that can occur while reading, projecting, or writing CSV
#[derive(Error, Debug)]
pub enum ProjectorError {
    /// I/O error on the input or output stream
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed CSV structure in the input
    #[error("CSV parse error at line {line}: {message}")]
    Parse { line: u64, message: String },

    /// Invalid field selection string
    #[error("Invalid field selection: {0}")]
    InvalidSelection(String),
}
