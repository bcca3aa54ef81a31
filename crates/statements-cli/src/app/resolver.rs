//! Path resolution for the config file and the database.

use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::config::{default_config_path, default_database_path, StatementsConfig};
use crate::constants::CONFIG_ENV;
use crate::errors::CliError;

/// Resolve the config file path, checking STATEMENTS_CONFIG first.
pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var(CONFIG_ENV) {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

/// Resolve the database path: `--db` / STATEMENTS_DB, then config, then the
/// XDG data default.
pub fn resolve_database_path(cli: &Cli, config: &StatementsConfig) -> anyhow::Result<PathBuf> {
    if let Some(path) = cli.db.as_deref().filter(|p| !p.trim().is_empty()) {
        return Ok(PathBuf::from(path));
    }
    if let Some(path) = config.database.path.as_deref().filter(|p| !p.trim().is_empty()) {
        return Ok(PathBuf::from(path));
    }
    default_database_path()
}

/// Error for commands that need an existing database.
pub fn missing_database_error(path: &Path) -> CliError {
    CliError::not_found(
        format!("No database found at {}", path.display()),
        "Run `statements init` to create it with demo data, or `statements schema` for an empty ledger.\n      Or point at an existing file: STATEMENTS_DB=/path/to/accounting.db",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_db_flag_wins_over_config() {
        let cli = Cli::try_parse_from(["statements", "--db", "/tmp/flag.db", "schema"]).unwrap();
        let config = StatementsConfig::new(PathBuf::from("/tmp/config.db"));
        let path = resolve_database_path(&cli, &config).unwrap();
        assert_eq!(path, PathBuf::from("/tmp/flag.db"));
    }

    #[test]
    fn test_missing_database_error_mentions_path() {
        let err = missing_database_error(Path::new("/nowhere/accounting.db"));
        let text = err.to_string();
        assert!(text.contains("/nowhere/accounting.db"));
        assert!(text.contains("statements init"));
    }
}
