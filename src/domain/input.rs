//! Parsing of the integer input format.
//!
//! One integer per line: an optional leading `-` followed by ASCII digits,
//! nothing else. A line without digits (blank, or a lone `-`) reads as 0.
//! Line terminators (`\n`, `\r\n`) are not part of a line.

use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, instrument};

use crate::domain::error::{DomainError, TreeResult};

static INTEGER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?[0-9]*$").expect("integer pattern is valid"));

/// True if `text` has the shape of an integer (sign and digits only).
pub fn is_integer(text: &str) -> bool {
    INTEGER.is_match(text)
}

/// Value of a well-formed token; digitless tokens are 0.
fn value_of(text: &str) -> Option<i32> {
    match text {
        "" | "-" => Some(0),
        _ => text.parse().ok(),
    }
}

/// Parse a single integer token, as typed at an interactive prompt.
///
/// Returns `None` for anything that is not an integer or does not fit `i32`.
pub fn parse_integer(text: &str) -> Option<i32> {
    if !is_integer(text) {
        return None;
    }
    value_of(text)
}

/// Parse file content into the level-order sequence of values.
///
/// # Errors
/// * [`DomainError::InvalidLine`] for the first malformed line (1-based)
/// * [`DomainError::OutOfRange`] for a well-formed line exceeding `i32`
/// * [`DomainError::EmptyInput`] if there are no lines at all
#[instrument(level = "debug", skip(content), fields(bytes = content.len()))]
pub fn parse_values(content: &str) -> TreeResult<Vec<i32>> {
    let mut values = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        let line_no = idx + 1;
        if !is_integer(line) {
            return Err(DomainError::InvalidLine {
                line: line_no,
                content: line.to_string(),
            });
        }
        let value = value_of(line).ok_or_else(|| DomainError::OutOfRange {
            line: line_no,
            content: line.to_string(),
        })?;
        values.push(value);
    }

    if values.is_empty() {
        return Err(DomainError::EmptyInput);
    }
    debug!("parsed {} values", values.len());
    Ok(values)
}
