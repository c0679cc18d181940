//! Custom error types for the hint-cards crate.

use thiserror::Error;

/// The primary error type for all operations in this crate.
#[derive(Debug, Error)]
pub enum HintsError {
    /// The hint source could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The source bytes are not valid in the detected text encoding.
    #[error("Failed to decode hint source as {encoding}")]
    Decode { encoding: &'static str },

    /// A required header column was not found.
    ///
    /// Only raised by strict grouping; the default grouping path degrades
    /// to an empty result instead.
    #[error("Missing required column: {column:?}")]
    MissingColumn { column: String },

    /// The configuration file could not be parsed.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl HintsError {
    /// Whether this error belongs to the "failed to load" surface
    /// (as opposed to a dataset or configuration problem).
    pub fn is_load_failure(&self) -> bool {
        matches!(self, HintsError::Io(_) | HintsError::Decode { .. })
    }
}

/// A convenience `Result` type alias using the crate's `HintsError` type.
pub type Result<T> = std::result::Result<T, HintsError>;
