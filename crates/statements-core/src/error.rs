//! Error types for statements core operations.
//!
//! Errors are descriptive at the core level; the CLI layer maps these to
//! user-friendly messages and hints.
//!
//! Incomplete manual-entry rows are not errors (they are skipped during
//! sanitization), and empty statements are not errors either (see
//! [`crate::report`]).

use rusqlite::ErrorCode;
use thiserror::Error;

/// Result type alias for statements operations.
pub type Result<T> = std::result::Result<T, StatementsError>;

/// Core error type for statements operations.
#[derive(Debug, Error)]
pub enum StatementsError {
    /// Foreign key, primary key or check constraint rejected a write.
    ///
    /// The surrounding transaction has been rolled back.
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    /// The store could not be opened or reached.
    #[error("Connection failure: {0}")]
    ConnectionFailure(String),

    /// Any other SQLite failure
    #[error("SQLite error: {source}")]
    Sqlite {
        #[source]
        source: rusqlite::Error,
    },

    /// Storage backend error (generic)
    #[error("Storage error: {0}")]
    Storage(String),

    /// Invalid user input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl StatementsError {
    /// Whether the error came from a rejected write (the ledger is unchanged).
    pub fn is_constraint_violation(&self) -> bool {
        matches!(self, Self::ConstraintViolation(_))
    }
}

impl From<rusqlite::Error> for StatementsError {
    fn from(err: rusqlite::Error) -> Self {
        match err {
            rusqlite::Error::SqliteFailure(code, message)
                if code.code == ErrorCode::ConstraintViolation =>
            {
                StatementsError::ConstraintViolation(
                    message.unwrap_or_else(|| code.to_string()),
                )
            }
            rusqlite::Error::SqliteFailure(code, message)
                if matches!(
                    code.code,
                    ErrorCode::CannotOpen | ErrorCode::NotADatabase | ErrorCode::PermissionDenied
                ) =>
            {
                StatementsError::ConnectionFailure(message.unwrap_or_else(|| code.to_string()))
            }
            other => StatementsError::Sqlite { source: other },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sqlite_failure(code: std::os::raw::c_int, message: &str) -> rusqlite::Error {
        rusqlite::Error::SqliteFailure(
            rusqlite::ffi::Error::new(code),
            Some(message.to_string()),
        )
    }

    #[test]
    fn test_constraint_failure_is_classified() {
        let err: StatementsError = sqlite_failure(
            rusqlite::ffi::SQLITE_CONSTRAINT_FOREIGNKEY,
            "FOREIGN KEY constraint failed",
        )
        .into();
        assert!(err.is_constraint_violation());
        assert!(err.to_string().contains("FOREIGN KEY"));
    }

    #[test]
    fn test_cannot_open_is_connection_failure() {
        let err: StatementsError =
            sqlite_failure(rusqlite::ffi::SQLITE_CANTOPEN, "unable to open database file").into();
        assert!(matches!(err, StatementsError::ConnectionFailure(_)));
    }

    #[test]
    fn test_other_errors_pass_through() {
        let err: StatementsError = rusqlite::Error::QueryReturnedNoRows.into();
        assert!(matches!(err, StatementsError::Sqlite { .. }));
    }
}
