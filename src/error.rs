//! Error types for the result metadata core.

use std::panic::Location;
use thiserror::Error;

/// Result type alias for result metadata operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for result metadata operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Statement-level failure (unrecognized wire field type).
    #[error("Statement error: {message}")]
    Statement { message: String },

    /// Column index out of bounds.
    #[error("Column index {index} out of bounds (columns: {count})")]
    ColumnIndexOutOfBounds { index: usize, count: usize },

    /// Type conversion error.
    #[error("Type conversion error: {message}")]
    TypeConversion { message: String },

    /// Buffer too small.
    #[error("Buffer too small: need {needed} bytes, have {available} filed at {location}")]
    BufferTooSmall {
        needed: usize,
        available: usize,
        location: &'static Location<'static>,
    },
}

impl Error {
    /// Create a statement error.
    pub fn statement(message: impl Into<String>) -> Self {
        Self::Statement {
            message: message.into(),
        }
    }

    /// Create a type conversion error.
    pub fn type_conversion(message: impl Into<String>) -> Self {
        Self::TypeConversion {
            message: message.into(),
        }
    }

    /// Create a buffer-too-small error recording the caller's location.
    #[track_caller]
    pub fn buffer_too_small(needed: usize, available: usize) -> Self {
        Self::BufferTooSmall {
            needed,
            available,
            location: Location::caller(),
        }
    }
}
