//! Errors during parsing/handling/conversion of primitives.

use thiserror::Error;

/// Error while parsing a primitive from its text form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("invalid length, expected {expected} bytes (got {got})")]
    InvalidLength { expected: usize, got: usize },

    #[error("invalid hex: {0}")]
    InvalidHex(String),
}
