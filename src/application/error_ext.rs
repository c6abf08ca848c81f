//! Error conversion helpers for console I/O

use std::io;

use crate::application::{ApplicationError, ApplicationResult};

/// Extension trait for converting `io::Result` to `ApplicationResult` with context.
pub trait IoResultExt<T> {
    /// Describe what was being done when the I/O error happened.
    ///
    /// # Example
    /// ```ignore
    /// output.write_line(&intro).with_io_context("write intro")?;
    /// ```
    fn with_io_context(self, action: &str) -> ApplicationResult<T>;
}

impl<T> IoResultExt<T> for io::Result<T> {
    fn with_io_context(self, action: &str) -> ApplicationResult<T> {
        self.map_err(|source| ApplicationError::Io {
            context: action.to_string(),
            source,
        })
    }
}
