//! Error types for timestamp parsing.

use thiserror::Error;

/// Errors that can occur when parsing an ISO-8601 timestamp.
///
/// The fail-soft `format_*` functions never surface these; they exist for
/// the `try_format_*` variants so callers can distinguish bad input from a
/// successfully formatted result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("empty timestamp")]
    Empty,

    #[error("invalid ISO-8601 timestamp: '{input}'")]
    InvalidTimestamp { input: String },
}
