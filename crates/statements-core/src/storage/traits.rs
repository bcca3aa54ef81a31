//! Ledger store trait definition.
//!
//! The `LedgerStore` trait is the seam between the aggregation engine and the
//! relational store that owns the `accounts` and `journal_entries` tables.

use std::path::Path;

use super::types::{Account, JournalEntry, LedgerSnapshot};
use crate::error::Result;

/// Storage interface for the two-table ledger.
///
/// All implementations must ensure:
/// - Every write operation is a single all-or-nothing transaction
/// - Foreign keys from entries to accounts are enforced
/// - Entries are deleted before accounts
/// - Errors roll back and propagate without retry
pub trait LedgerStore {
    /// Open (or create) the store at the specified path.
    ///
    /// # Errors
    ///
    /// Returns `StatementsError::ConnectionFailure` if the store cannot be
    /// opened.
    fn open(path: &Path) -> Result<Self>
    where
        Self: Sized;

    /// Close the store, releasing the connection.
    fn close(self) -> Result<()>;

    /// Create both tables if they do not exist. Idempotent; never touches rows.
    fn ensure_schema(&mut self) -> Result<()>;

    /// Read every account and entry in one read transaction.
    fn snapshot(&self) -> Result<LedgerSnapshot>;

    // --- Mutations ---

    /// Replace the ledger contents with the fixed demonstration dataset.
    fn seed(&mut self) -> Result<()>;

    /// Delete every entry, then every account.
    fn clear(&mut self) -> Result<()>;

    /// Delete everything, then insert the given accounts and entries.
    ///
    /// Rows are inserted as given; callers sanitize first.
    ///
    /// # Errors
    ///
    /// Returns `StatementsError::ConstraintViolation` if any row is rejected
    /// (unknown account, duplicate id, negative amount). Nothing is changed
    /// in that case.
    fn replace(&mut self, accounts: &[Account], entries: &[JournalEntry]) -> Result<()>;

    // --- Maintenance operations ---

    /// Check store integrity.
    ///
    /// Verifies:
    /// - SQLite page integrity
    /// - Foreign key relationships
    fn check_integrity(&self) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trait_definition_compiles() {
        fn _accepts_ledger_store<T: LedgerStore>(_store: T) {}
    }
}
