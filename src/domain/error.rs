//! Domain-level errors (no I/O concerns)

use thiserror::Error;

/// Domain errors represent mistakes in how an interaction tree was assembled.
/// These are programming errors, never user input errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("interaction {intro:?} has no menu options, prompt answers or action")]
    MissingBody { intro: String },
}
