//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (reserved by shells, and by clap)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// General failure.
    pub const FAILURE: i32 = 1;

    /// Resource not found (config, database, input file).
    pub const NOT_FOUND: i32 = 3;

    /// Invalid user input or arguments.
    pub const INVALID_INPUT: i32 = 4;

    /// A write was rejected by a store constraint and rolled back.
    pub const CONSTRAINT_VIOLATION: i32 = 5;

    /// Integrity check failed, or the ledger does not balance.
    pub const INTEGRITY_FAILED: i32 = 6;
}

/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "STATEMENTS_CONFIG";

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "STATEMENTS_LOG";

/// Directory name under the XDG config and data homes.
pub const APP_DIR: &str = "statements";

/// Database file name under the data directory.
pub const DATABASE_FILE: &str = "accounting.db";
