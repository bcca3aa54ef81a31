//! SQLite ledger store.
//!
//! A single connection guarded by a mutex. Every mutation runs in one
//! `IMMEDIATE` transaction so a failure at any statement leaves the previous
//! ledger untouched; reads run in a deferred transaction so both tables come
//! from the same snapshot.

mod row;

use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use rusqlite::{Connection, TransactionBehavior};
use tracing::debug;

use crate::error::{Result, StatementsError};
use crate::storage::traits::LedgerStore;
use crate::storage::types::{Account, JournalEntry, LedgerSnapshot};

use row::{amount_to_sql, AccountRow, EntryRow};

const SCHEMA_SQL: &str = include_str!("schema.sql");
const SEED_SQL: &str = include_str!("seed.sql");
const CLEAR_SQL: &str = "DELETE FROM journal_entries; DELETE FROM accounts;";

/// SQLite-backed ledger store.
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Open a private in-memory store (used by tests and dry runs).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::from_connection(conn)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Lock the database connection, returning an error if the mutex is poisoned.
    fn lock_conn(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| StatementsError::Storage("SQLite connection poisoned".to_string()))
    }

    /// Run `work` inside an immediate transaction, committing only on success.
    fn write<F>(&self, work: F) -> Result<()>
    where
        F: FnOnce(&rusqlite::Transaction<'_>) -> Result<()>,
    {
        let mut conn = self.lock_conn()?;
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;
        // Dropping `tx` on the error path rolls back.
        work(&tx)?;
        tx.commit()?;
        Ok(())
    }
}

impl LedgerStore for SqliteStore {
    fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path).map_err(|e| {
            StatementsError::ConnectionFailure(format!("{}: {}", path.display(), e))
        })?;
        Self::from_connection(conn)
    }

    fn close(self) -> Result<()> {
        let conn = self
            .conn
            .into_inner()
            .map_err(|_| StatementsError::Storage("SQLite connection poisoned".to_string()))?;
        conn.close().map_err(|(_, e)| e.into())
    }

    fn ensure_schema(&mut self) -> Result<()> {
        self.write(|tx| {
            tx.execute_batch(SCHEMA_SQL)?;
            Ok(())
        })
    }

    fn snapshot(&self) -> Result<LedgerSnapshot> {
        let mut conn = self.lock_conn()?;
        let tx = conn.transaction()?;

        let accounts = {
            let mut stmt = tx.prepare(
                "SELECT account_id, account_name, account_type FROM accounts ORDER BY account_id",
            )?;
            let rows = stmt.query_map([], AccountRow::from_sql)?;
            let mut accounts = Vec::new();
            for row in rows {
                accounts.push(Account::from(row?));
            }
            accounts
        };

        let entries = {
            let mut stmt = tx.prepare(
                r#"
                SELECT entry_id, account_id, entry_date, debit, credit
                FROM journal_entries
                ORDER BY entry_id
                "#,
            )?;
            let rows = stmt.query_map([], EntryRow::from_sql)?;
            let mut entries = Vec::new();
            for row in rows {
                entries.push(JournalEntry::try_from(row?)?);
            }
            entries
        };

        tx.commit()?;
        debug!(
            accounts = accounts.len(),
            entries = entries.len(),
            "read ledger snapshot"
        );

        Ok(LedgerSnapshot::new(accounts, entries))
    }

    fn seed(&mut self) -> Result<()> {
        self.write(|tx| {
            tx.execute_batch(SEED_SQL)?;
            Ok(())
        })
    }

    fn clear(&mut self) -> Result<()> {
        self.write(|tx| {
            tx.execute_batch(CLEAR_SQL)?;
            Ok(())
        })
    }

    fn replace(&mut self, accounts: &[Account], entries: &[JournalEntry]) -> Result<()> {
        self.write(|tx| {
            tx.execute_batch(CLEAR_SQL)?;

            let mut insert_account = tx.prepare(
                "INSERT INTO accounts (account_id, account_name, account_type) VALUES (?, ?, ?)",
            )?;
            for account in accounts {
                insert_account.execute((
                    account.account_id,
                    account.account_name.as_str(),
                    account.account_type.as_str(),
                ))?;
            }

            let mut insert_entry = tx.prepare(
                r#"
                INSERT INTO journal_entries (entry_id, account_id, entry_date, debit, credit)
                VALUES (?, ?, ?, ?, ?)
                "#,
            )?;
            for entry in entries {
                insert_entry.execute((
                    entry.entry_id,
                    entry.account_id,
                    entry.entry_date.as_str(),
                    amount_to_sql(entry.debit)?,
                    amount_to_sql(entry.credit)?,
                ))?;
            }

            Ok(())
        })
    }

    fn check_integrity(&self) -> Result<()> {
        let conn = self.lock_conn()?;

        let status: String = conn.query_row("PRAGMA integrity_check", [], |row| row.get(0))?;
        if status != "ok" {
            return Err(StatementsError::Storage(format!(
                "SQLite integrity check failed: {}",
                status
            )));
        }

        let mut stmt = conn.prepare("PRAGMA foreign_key_check")?;
        let mut rows = stmt.query([])?;
        if rows.next()?.is_some() {
            return Err(StatementsError::Storage(
                "Foreign key integrity check failed".to_string(),
            ));
        }

        Ok(())
    }
}
