//! UI primitives for the Statements CLI.
//!
//! This module provides:
//! - **Context**: Environment detection (TTY, color, unicode)
//! - **Mode**: Output mode resolution (json, plain, pretty)
//! - **Theme**: Badge tokens, color styles
//! - **Render**: Tables, headers, receipts, hints
//! - **Format**: Money formatting
//!
//! # Usage
//!
//! ```ignore
//! let ui = ctx.ui_context(args.json, args.format);
//!
//! if ui.mode.is_json() {
//!     // Handle JSON output separately
//!     return Ok(());
//! }
//!
//! print(&ui, &header(&ui, "trial-balance", Some(&db_path)));
//! print(&ui, &table(&ui, &columns, &rows, Some(&footer)));
//! ```

mod context;
pub mod format;
mod mode;
pub mod render;
pub mod theme;

// Re-export core types at module level
pub use context::UiContext;
pub use mode::OutputMode;
pub use theme::Badge;

// Re-export commonly used render functions
pub use render::{
    badge, blank_line, header, hint, kv, print, print_error, receipt, section, table, Column,
};

pub use format::amount;
