//! Application-level errors (wraps domain errors)

use thiserror::Error;

use crate::domain::DomainError;

/// Errors that abort a running session.
///
/// Failures raised by actions never show up here: they are reported on the
/// session output and the session carries on.
#[derive(Error, Debug)]
pub enum ApplicationError {
    /// Misconfigured tree, fatal.
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("input closed before the session finished")]
    EndOfInput,

    #[error("config error: {message}")]
    Config { message: String },

    #[error("I/O error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
