//! CLI error types for structured error handling.
//!
//! Typed errors map to specific exit codes so that scripts can tell a
//! missing database from bad input or a failed integrity check.

use std::fmt;

use statements_core::StatementsError;

use crate::constants::exit_codes;

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// Resource not found (config, database, input file)
    NotFound { message: String, hint: String },

    /// Invalid user input
    InvalidInput(String),

    /// Integrity check or balance check failed
    IntegrityFailed(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NotFound { message, hint } => write!(f, "{}\nHint: {}", message, hint),
            CliError::InvalidInput(message) => write!(f, "{}", message),
            CliError::IntegrityFailed(message) => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for CliError {}

impl CliError {
    /// Create a NotFound error with message and hint.
    pub fn not_found(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::NotFound {
            message: message.into(),
            hint: hint.into(),
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        CliError::InvalidInput(message.into())
    }

    pub fn integrity_failed(message: impl Into<String>) -> Self {
        CliError::IntegrityFailed(message.into())
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::NotFound { .. } => exit_codes::NOT_FOUND,
            CliError::InvalidInput(_) => exit_codes::INVALID_INPUT,
            CliError::IntegrityFailed(_) => exit_codes::INTEGRITY_FAILED,
        }
    }
}

/// Exit code for any error surfaced by a command handler.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        return cli_err.exit_code();
    }
    match err.downcast_ref::<StatementsError>() {
        Some(StatementsError::ConstraintViolation(_)) => exit_codes::CONSTRAINT_VIOLATION,
        Some(StatementsError::InvalidInput(_)) => exit_codes::INVALID_INPUT,
        _ => exit_codes::FAILURE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display_includes_hint() {
        let err = CliError::not_found("No database at /x", "Run `statements init`");
        let text = err.to_string();
        assert!(text.contains("No database at /x"));
        assert!(text.contains("Hint: Run `statements init`"));
        assert_eq!(err.exit_code(), exit_codes::NOT_FOUND);
    }

    #[test]
    fn test_exit_code_for_core_errors() {
        let err = anyhow::Error::new(StatementsError::ConstraintViolation("fk".into()));
        assert_eq!(exit_code_for(&err), exit_codes::CONSTRAINT_VIOLATION);

        let err = anyhow::Error::new(CliError::integrity_failed("unbalanced"));
        assert_eq!(exit_code_for(&err), exit_codes::INTEGRITY_FAILED);

        let err = anyhow::anyhow!("something else");
        assert_eq!(exit_code_for(&err), exit_codes::FAILURE);
    }
}
