//! Application context for the Statements CLI.
//!
//! Combines CLI arguments with the lazily-loaded config file and opens the
//! ledger engine on demand.

use std::path::PathBuf;

use once_cell::unsync::OnceCell;
use tracing::debug;

use statements_core::LedgerEngine;

use crate::cli::{Cli, OutputFormat};
use crate::config::{read_config, StatementsConfig};
use crate::ui::UiContext;

use super::resolver::{missing_database_error, resolve_config_path, resolve_database_path};

/// Application context that bundles CLI args with configuration.
pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<StatementsConfig>,
}

impl<'a> AppContext<'a> {
    /// Create a new application context from CLI arguments.
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
        }
    }

    /// Get the CLI arguments.
    pub fn cli(&self) -> &Cli {
        self.cli
    }

    /// Check if quiet mode is enabled.
    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Get the config file contents, loading them lazily.
    ///
    /// A missing config file is not an error; defaults apply.
    pub fn config(&self) -> anyhow::Result<&StatementsConfig> {
        self.config.get_or_try_init(|| {
            let path = resolve_config_path()?;
            if path.exists() {
                debug!(path = %path.display(), "loading config");
                read_config(&path)
            } else {
                Ok(StatementsConfig::default())
            }
        })
    }

    /// Resolved database path.
    pub fn database_path(&self) -> anyhow::Result<PathBuf> {
        resolve_database_path(self.cli, self.config()?)
    }

    /// Build a UI context from command flags plus global and config settings.
    pub fn ui_context(&self, json: bool, format: Option<OutputFormat>) -> UiContext {
        let (config_ascii, config_no_color) = match self.config() {
            Ok(config) => (config.ui.ascii, config.ui.no_color),
            Err(_) => (false, false),
        };
        UiContext::from_env(
            json,
            format,
            self.cli.no_color || config_no_color,
            self.cli.ascii || config_ascii,
        )
    }

    /// Open the engine over an existing database.
    pub fn open_engine(&self) -> anyhow::Result<LedgerEngine> {
        let path = self.database_path()?;
        if !path.exists() {
            return Err(missing_database_error(&path).into());
        }
        debug!(path = %path.display(), "opening database");
        Ok(LedgerEngine::open(&path)?)
    }

    /// Open the engine, creating the database file and its directory if needed.
    pub fn create_engine(&self) -> anyhow::Result<(LedgerEngine, PathBuf)> {
        let path = self.database_path()?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                anyhow::anyhow!(
                    "Failed to create database directory {}: {}",
                    parent.display(),
                    e
                )
            })?;
        }
        debug!(path = %path.display(), "opening database (create)");
        let engine = LedgerEngine::open(&path)?;
        Ok((engine, path))
    }
}
