//! Error types for the notice board.

use thiserror::Error;

/// Common error type for the notice board.
#[derive(Error, Debug)]
pub enum NoticeError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Backing table could not be read or written.
    ///
    /// CSV errors are converted into this variant.
    #[error("storage error: {0}")]
    Storage(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Validation error for user input.
    #[error("validation error: {0}")]
    Validation(String),

    /// Resource not found.
    #[error("{0} not found")]
    NotFound(String),

    /// Row index outside the table.
    #[error("index {index} out of range for {len} rows")]
    IndexOutOfRange {
        /// Requested row index.
        index: usize,
        /// Row count at the time of the request.
        len: usize,
    },

    /// The terminal input reached end of file.
    #[error("input closed")]
    InputClosed,
}

impl From<csv::Error> for NoticeError {
    fn from(e: csv::Error) -> Self {
        NoticeError::Storage(e.to_string())
    }
}

/// Result type alias for notice board operations.
pub type Result<T> = std::result::Result<T, NoticeError>;
