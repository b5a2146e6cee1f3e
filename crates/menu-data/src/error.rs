//! Error types for the menu-data crate.

use thiserror::Error;

/// Errors that can occur while loading or validating profile and menu records.
#[derive(Error, Debug)]
pub enum MenuDataError {
    /// File could not be read or written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Record is not valid JSON or is missing required fields.
    ///
    /// A single malformed dish fails the whole menu batch; partial scoring
    /// of malformed input is not attempted.
    #[error("Malformed record: {0}")]
    Json(#[from] serde_json::Error),

    /// A dish deserialized but carries an unusable field value
    #[error("Invalid dish at index {index} ({name:?}): {reason}")]
    InvalidDish {
        index: usize,
        name: String,
        reason: String,
    },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, MenuDataError>;
