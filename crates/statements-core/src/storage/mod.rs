//! Ledger storage: the `accounts` and `journal_entries` tables.

mod sqlite;
pub mod traits;
pub mod types;

pub use sqlite::SqliteStore;
pub use traits::LedgerStore;
pub use types::{Account, AccountType, JournalEntry, LedgerSnapshot};
