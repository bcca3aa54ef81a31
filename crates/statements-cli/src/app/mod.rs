//! Application-level utilities for the Statements CLI.
//!
//! This module provides:
//! - Application context for unified CLI + config handling
//! - Path resolution for the config file and the database

mod context;
mod resolver;

// Re-export public API
pub use context::AppContext;
pub use resolver::{resolve_config_path, resolve_database_path};
