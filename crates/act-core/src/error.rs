//! Validation errors for core types.

use thiserror::Error;

/// Validation errors for core types.
///
/// These surface both on construction and on deserialization of persisted
/// records, so a document can never smuggle an invalid record into memory.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    /// The provided value was empty after trimming.
    #[error("{field} cannot be empty")]
    Empty { field: &'static str },

    /// A record carried an end time without a duration, or vice versa.
    #[error("end_time and duration_seconds must be present together")]
    HalfClosed,

    /// A record carried a negative duration.
    #[error("duration_seconds must be non-negative, got {value}")]
    NegativeDuration { value: i64 },

    /// A stored timestamp failed to parse.
    #[error("invalid timestamp {value:?}")]
    Timestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}
