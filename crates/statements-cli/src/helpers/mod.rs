//! Input helpers for the CLI.
//!
//! - **grid**: manual-entry grid files (CSV / JSON) and their templates
//! - **confirm**: confirmation before replacing ledger data

mod confirm;
mod grid;

// Re-export public API
pub use confirm::confirm_destructive;
pub use grid::{read_account_grid, read_entry_grid, write_template};
