//! The ledger engine: an explicitly owned store handle plus the statement
//! queries and mutations the presentation layer calls.
//!
//! Every query reads a fresh snapshot (no caching) and every mutation is one
//! store transaction.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::Result;
use crate::report::{
    self, AccountBalance, AccountTrialBalance, BalanceSheet, IncomeStatementSummary,
    TrialBalanceLine,
};
use crate::sanitize::{sanitize_accounts, sanitize_entries, AccountInput, EntryInput};
use crate::storage::{LedgerSnapshot, LedgerStore, SqliteStore};

/// Outcome of a manual-entry replacement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplaceSummary {
    pub accounts_inserted: usize,
    pub accounts_skipped: usize,
    pub entries_inserted: usize,
    pub entries_skipped: usize,
}

/// Ledger engine over a store handle.
pub struct LedgerEngine<S: LedgerStore = SqliteStore> {
    store: S,
}

impl LedgerEngine<SqliteStore> {
    /// Open the SQLite store at `path`. Does not create tables.
    pub fn open(path: &Path) -> Result<Self> {
        Ok(Self::new(SqliteStore::open(path)?))
    }

    /// Engine over a private in-memory store.
    pub fn open_in_memory() -> Result<Self> {
        Ok(Self::new(SqliteStore::open_in_memory()?))
    }
}

impl<S: LedgerStore> LedgerEngine<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Release the store handle.
    pub fn close(self) -> Result<()> {
        self.store.close()
    }

    // --- Schema ---

    /// Create the ledger tables if needed. Never touches existing rows.
    pub fn ensure_schema(&mut self) -> Result<()> {
        self.store.ensure_schema()
    }

    /// Ensure the schema, then reset the ledger to the demonstration data.
    ///
    /// This destroys any manually entered data. Call [`Self::ensure_schema`]
    /// alone to keep existing rows.
    pub fn init(&mut self) -> Result<()> {
        warn!("initializing ledger: existing data will be replaced by demo data");
        self.store.ensure_schema()?;
        self.seed()
    }

    // --- Mutations ---

    /// Reset the ledger to the fixed demonstration dataset.
    pub fn seed(&mut self) -> Result<()> {
        self.store.seed()?;
        info!("ledger reset to demo data");
        Ok(())
    }

    /// Remove every entry and account.
    pub fn clear(&mut self) -> Result<()> {
        self.store.clear()?;
        info!("ledger cleared");
        Ok(())
    }

    /// Replace the whole ledger with manually entered grid rows.
    ///
    /// Incomplete rows are skipped (see [`crate::sanitize`]); the rest are
    /// written in one transaction. An entry pointing at an account that is
    /// not in `accounts` fails the whole call and keeps the old ledger.
    pub fn replace(
        &mut self,
        accounts: &[AccountInput],
        entries: &[EntryInput],
    ) -> Result<ReplaceSummary> {
        let accounts = sanitize_accounts(accounts);
        let entries = sanitize_entries(entries);

        self.store.replace(&accounts.rows, &entries.rows)?;

        let summary = ReplaceSummary {
            accounts_inserted: accounts.rows.len(),
            accounts_skipped: accounts.skipped.len(),
            entries_inserted: entries.rows.len(),
            entries_skipped: entries.skipped.len(),
        };
        info!(
            accounts_inserted = summary.accounts_inserted,
            accounts_skipped = summary.accounts_skipped,
            entries_inserted = summary.entries_inserted,
            entries_skipped = summary.entries_skipped,
            "ledger replaced from manual entries"
        );
        Ok(summary)
    }

    // --- Queries ---

    /// Current ledger contents.
    pub fn snapshot(&self) -> Result<LedgerSnapshot> {
        self.store.snapshot()
    }

    pub fn trial_balance_long(&self) -> Result<Vec<TrialBalanceLine>> {
        report::trial_balance_long(&self.snapshot()?)
    }

    pub fn trial_balance_short(&self) -> Result<Vec<AccountTrialBalance>> {
        report::trial_balance_short(&self.snapshot()?)
    }

    pub fn account_balances(&self) -> Result<Vec<AccountBalance>> {
        report::account_balances(&self.snapshot()?)
    }

    /// Balance sheet detail lines plus the single totals row.
    pub fn balance_sheet_detail_and_totals(&self) -> Result<BalanceSheet> {
        report::balance_sheet(&self.snapshot()?)
    }

    /// Income statement, or `None` when there is no revenue or expense activity.
    pub fn income_statement_summary(&self) -> Result<Option<IncomeStatementSummary>> {
        report::income_statement_summary(&self.snapshot()?)
    }

    // --- Maintenance ---

    pub fn check_integrity(&self) -> Result<()> {
        self.store.check_integrity()
    }
}
