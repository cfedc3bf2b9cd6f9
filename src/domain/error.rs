//! Domain-level error types for phone-cleaner.
//!
//! All errors are typed with `thiserror` and provide meaningful context
//! without exposing internal details to end users.

use thiserror::Error;

/// Application-level errors, one variant per fatal failure category.
///
/// An upload that parses but yields zero qualifying numbers is NOT an
/// error; the presentation layer reports that outcome as a warning.
#[derive(Error, Debug)]
pub enum AppError {
    /// Input bytes are not valid UTF-8 text.
    #[error("Input is not valid UTF-8: {message}")]
    Encoding {
        message: String,
        #[source]
        source: Option<std::str::Utf8Error>,
    },

    /// Input cannot be parsed as a delimited table.
    #[error("Malformed input table: {message}")]
    MalformedInput {
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// Parsed table has no columns to read from.
    #[error("Input table has no columns; expected phone numbers in the first column")]
    MissingColumn,

    /// Configuration or environment error.
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// IO operation failed.
    #[error("IO error: {message}")]
    Io {
        message: String,
        #[source]
        source: Option<std::io::Error>,
    },
}

impl AppError {
    /// Create an encoding error from a UTF-8 validation failure.
    pub fn encoding(err: std::str::Utf8Error) -> Self {
        Self::Encoding {
            message: err.to_string(),
            source: Some(err),
        }
    }

    /// Create a malformed-input error from a CSV parse failure.
    pub fn malformed(err: csv::Error) -> Self {
        Self::MalformedInput {
            message: err.to_string(),
            source: Some(err),
        }
    }

    /// Create an IO error with context.
    pub fn io(message: impl Into<String>, err: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source: Some(err),
        }
    }
}

/// Result type alias using `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
