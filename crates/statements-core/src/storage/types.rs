//! Core data types for the storage layer.
//!
//! These mirror the two ledger tables (`accounts`, `journal_entries`) plus
//! the in-memory snapshot the aggregation engine works from.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::amount;
use crate::error::Result;

/// Classification of an account.
///
/// The five standard types drive statement sections and ordering. Any other
/// stored value is carried through unchanged as [`AccountType::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AccountType {
    Asset,
    Liability,
    Equity,
    Revenue,
    Expense,
    Other(String),
}

impl AccountType {
    /// Parse a stored type name. Matching is exact (case-sensitive).
    pub fn parse(value: &str) -> Self {
        match value {
            "Asset" => Self::Asset,
            "Liability" => Self::Liability,
            "Equity" => Self::Equity,
            "Revenue" => Self::Revenue,
            "Expense" => Self::Expense,
            other => Self::Other(other.to_string()),
        }
    }

    /// The value stored in `accounts.account_type`.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Asset => "Asset",
            Self::Liability => "Liability",
            Self::Equity => "Equity",
            Self::Revenue => "Revenue",
            Self::Expense => "Expense",
            Self::Other(value) => value,
        }
    }

    /// Statement ordering rank: Asset=1 .. Expense=5, anything else 6.
    pub fn rank(&self) -> u8 {
        match self {
            Self::Asset => 1,
            Self::Liability => 2,
            Self::Equity => 3,
            Self::Revenue => 4,
            Self::Expense => 5,
            Self::Other(_) => 6,
        }
    }

    /// Display section name (plural), passing unknown types through.
    pub fn section(&self) -> &str {
        match self {
            Self::Asset => "Assets",
            Self::Liability => "Liabilities",
            Self::Equity => "Equity",
            Self::Revenue => "Revenues",
            Self::Expense => "Expenses",
            Self::Other(value) => value,
        }
    }

    /// Whether the type appears on the balance sheet.
    pub fn is_balance_sheet(&self) -> bool {
        matches!(self, Self::Asset | Self::Liability | Self::Equity)
    }

    /// Whether the type appears on the income statement.
    pub fn is_income_statement(&self) -> bool {
        matches!(self, Self::Revenue | Self::Expense)
    }
}

impl From<String> for AccountType {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<AccountType> for String {
    fn from(value: AccountType) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A ledger account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Primary key
    pub account_id: i64,

    /// Display name
    pub account_name: String,

    /// Account classification
    pub account_type: AccountType,
}

impl Account {
    pub fn new(account_id: i64, account_name: impl Into<String>, account_type: AccountType) -> Self {
        Self {
            account_id,
            account_name: account_name.into(),
            account_type,
        }
    }
}

/// One side of a double-entry posting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    /// Primary key
    pub entry_id: i64,

    /// Account this entry posts to
    pub account_id: i64,

    /// Posting date, stored as text (e.g. "2025-01-31")
    pub entry_date: String,

    /// Debit amount (non-negative)
    pub debit: Decimal,

    /// Credit amount (non-negative)
    pub credit: Decimal,
}

impl JournalEntry {
    pub fn new(
        entry_id: i64,
        account_id: i64,
        entry_date: impl Into<String>,
        debit: Decimal,
        credit: Decimal,
    ) -> Self {
        Self {
            entry_id,
            account_id,
            entry_date: entry_date.into(),
            debit,
            credit,
        }
    }
}

/// Full contents of the ledger read in a single transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    /// All accounts, ordered by id
    pub accounts: Vec<Account>,

    /// All journal entries, ordered by id
    pub entries: Vec<JournalEntry>,
}

impl LedgerSnapshot {
    pub fn new(accounts: Vec<Account>, entries: Vec<JournalEntry>) -> Self {
        Self { accounts, entries }
    }

    /// True when the ledger holds no accounts and no entries.
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty() && self.entries.is_empty()
    }

    /// Sum of every raw debit in the ledger.
    pub fn total_debit(&self) -> Result<Decimal> {
        amount::sum(self.entries.iter().map(|e| e.debit))
    }

    /// Sum of every raw credit in the ledger.
    pub fn total_credit(&self) -> Result<Decimal> {
        amount::sum(self.entries.iter().map(|e| e.credit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_type_round_trip_names() {
        for name in ["Asset", "Liability", "Equity", "Revenue", "Expense"] {
            assert_eq!(AccountType::parse(name).as_str(), name);
        }
    }

    #[test]
    fn test_unknown_type_passes_through() {
        let kind = AccountType::parse("Contra");
        assert_eq!(kind, AccountType::Other("Contra".to_string()));
        assert_eq!(kind.section(), "Contra");
        assert_eq!(kind.rank(), 6);
    }

    #[test]
    fn test_type_matching_is_case_sensitive() {
        assert_eq!(
            AccountType::parse("asset"),
            AccountType::Other("asset".to_string())
        );
    }

    #[test]
    fn test_sections_are_plural() {
        assert_eq!(AccountType::Asset.section(), "Assets");
        assert_eq!(AccountType::Liability.section(), "Liabilities");
        assert_eq!(AccountType::Equity.section(), "Equity");
        assert_eq!(AccountType::Revenue.section(), "Revenues");
        assert_eq!(AccountType::Expense.section(), "Expenses");
    }

    #[test]
    fn test_account_type_serializes_as_string() {
        let json = serde_json::to_string(&AccountType::Liability).unwrap();
        assert_eq!(json, "\"Liability\"");
        let parsed: AccountType = serde_json::from_str("\"Suspense\"").unwrap();
        assert_eq!(parsed, AccountType::Other("Suspense".to_string()));
    }
}
