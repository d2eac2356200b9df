//! Error types shared across the activetick crates.

use thiserror::Error;

/// Error for a timestamp that does not follow the server's wire format.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WireTimeError {
    /// Wrong length or non-digit characters.
    #[error("invalid wire time {value:?}: expected {expected_len} ASCII digits")]
    Malformed {
        /// The offending input.
        value: String,
        /// The number of digits the format requires.
        expected_len: usize,
    },

    /// Digits that do not form a valid calendar date and time.
    #[error("invalid wire time {value:?}: {source}")]
    OutOfRange {
        /// The offending input.
        value: String,
        /// The underlying chrono error.
        #[source]
        source: chrono::ParseError,
    },
}
