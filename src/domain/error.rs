//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent malformed input or broken tree invariants.
/// These are independent of where the input came from.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("no integers to build a tree from (empty input)")]
    EmptyInput,

    #[error("invalid line {line}: {content:?} (expected an optional '-' followed by digits)")]
    InvalidLine { line: usize, content: String },

    #[error("line {line}: {content:?} does not fit a 32-bit integer")]
    OutOfRange { line: usize, content: String },

    #[error("tree construction failed: {0}")]
    Construction(String),
}

/// Result type for tree operations.
pub type TreeResult<T> = Result<T, DomainError>;
