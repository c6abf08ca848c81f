//! CLI-level errors (wraps application errors)

use thiserror::Error;

use crate::application::ApplicationError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Application(#[from] ApplicationError),

    #[error("{0}")]
    Usage(String),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) => crate::exitcode::USAGE,
            CliError::Application(e) => match e {
                ApplicationError::Domain(_) | ApplicationError::Config { .. } => {
                    crate::exitcode::CONFIG
                }
                ApplicationError::EndOfInput => crate::exitcode::NOINPUT,
                ApplicationError::Io { .. } => crate::exitcode::IOERR,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;

    #[test]
    fn given_misconfigured_tree_when_mapping_then_exit_code_is_config() {
        let err = CliError::from(ApplicationError::from(DomainError::MissingBody {
            intro: String::new(),
        }));
        assert_eq!(err.exit_code(), crate::exitcode::CONFIG);
    }

    #[test]
    fn given_closed_input_or_io_failure_when_mapping_then_uses_dedicated_codes() {
        let eof = CliError::from(ApplicationError::EndOfInput);
        let io = CliError::from(ApplicationError::Io {
            context: "write intro".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"),
        });

        assert_eq!(eof.exit_code(), crate::exitcode::NOINPUT);
        assert_eq!(io.exit_code(), crate::exitcode::IOERR);
    }

    #[test]
    fn given_usage_error_when_mapping_then_exit_code_is_usage() {
        let err = CliError::Usage("no command".to_string());
        assert_eq!(err.exit_code(), crate::exitcode::USAGE);
    }
}
