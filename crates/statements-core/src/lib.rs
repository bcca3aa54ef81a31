//! # Statements Core
//!
//! Core library for Statements - trial balance, balance sheet and income
//! statement computed from a double-entry ledger kept in SQLite.
//!
//! This crate provides the ledger store, the aggregation engine and the
//! manual-entry replacement path, independent of any presentation layer.
//!
//! ## Architecture
//!
//! - **storage**: Store trait, SQLite implementation, ledger data types
//! - **sanitize**: Manual-entry grid rows to ledger rows
//! - **report**: Pure statement computations
//! - **amount**: Overflow-checked decimal sums
//! - **engine**: Store handle plus the statement API

mod amount;
pub mod engine;
pub mod error;
pub mod report;
pub mod sanitize;
pub mod storage;

pub use engine::{LedgerEngine, ReplaceSummary};
pub use error::{Result, StatementsError};
pub use storage::{LedgerStore, SqliteStore};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
