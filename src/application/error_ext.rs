//! Error conversion helpers for I/O results
//!
//! Attaches the input path or the terminal action to a raw `io::Error`.

use std::io;
use std::path::Path;

use crate::application::{ApplicationError, ApplicationResult};

/// Extension trait for converting `io::Result` to `ApplicationResult` with context.
pub trait IoResultExt<T> {
    /// Failure to read the integer input file.
    ///
    /// # Example
    /// ```ignore
    /// fs.read_to_string(path).with_input_context(path)?;
    /// ```
    fn with_input_context(self, path: &Path) -> ApplicationResult<T>;

    /// Failure while talking to the user.
    fn with_terminal_context(self, action: &str) -> ApplicationResult<T>;
}

impl<T> IoResultExt<T> for io::Result<T> {
    fn with_input_context(self, path: &Path) -> ApplicationResult<T> {
        self.map_err(|source| ApplicationError::InputUnreadable {
            path: path.to_path_buf(),
            source,
        })
    }

    fn with_terminal_context(self, action: &str) -> ApplicationResult<T> {
        self.map_err(|source| ApplicationError::Terminal {
            context: action.to_string(),
            source,
        })
    }
}
