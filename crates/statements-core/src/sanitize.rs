//! Manual-entry input sanitization.
//!
//! Manual input arrives as raw grid rows: any cell may be blank, and the
//! grid itself validates nothing. This module is the validation boundary.
//! Incomplete rows are dropped here (and reported back), defaults are
//! filled in, and everything that survives goes to the store as-is, where
//! referential and uniqueness checks happen.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::storage::{Account, AccountType, JournalEntry};

/// Date used for entries whose date cell is blank.
pub const DEFAULT_ENTRY_DATE: &str = "2025-01-01";

/// One row of the accounts grid. Every cell may be missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountInput {
    #[serde(default)]
    pub account_id: Option<i64>,
    #[serde(default)]
    pub account_name: Option<String>,
    #[serde(default)]
    pub account_type: Option<String>,
}

impl AccountInput {
    pub fn new(account_id: i64, account_name: &str, account_type: &str) -> Self {
        Self {
            account_id: Some(account_id),
            account_name: Some(account_name.to_string()),
            account_type: Some(account_type.to_string()),
        }
    }
}

/// One row of the journal grid. Every cell may be missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntryInput {
    #[serde(default)]
    pub entry_id: Option<i64>,
    #[serde(default)]
    pub account_id: Option<i64>,
    #[serde(default)]
    pub entry_date: Option<String>,
    #[serde(default)]
    pub debit: Option<Decimal>,
    #[serde(default)]
    pub credit: Option<Decimal>,
}

impl EntryInput {
    pub fn new(
        entry_id: i64,
        account_id: i64,
        entry_date: &str,
        debit: Decimal,
        credit: Decimal,
    ) -> Self {
        Self {
            entry_id: Some(entry_id),
            account_id: Some(account_id),
            entry_date: Some(entry_date.to_string()),
            debit: Some(debit),
            credit: Some(credit),
        }
    }
}

/// Rows that survived sanitization plus the positions of those that did not.
#[derive(Debug, Clone, PartialEq)]
pub struct Sanitized<T> {
    pub rows: Vec<T>,
    /// Zero-based indexes of skipped input rows
    pub skipped: Vec<usize>,
}

/// Keep account rows that have an id, a name and a type.
pub fn sanitize_accounts(rows: &[AccountInput]) -> Sanitized<Account> {
    let mut kept = Vec::with_capacity(rows.len());
    let mut skipped = Vec::new();

    for (index, row) in rows.iter().enumerate() {
        match (row.account_id, &row.account_name, &row.account_type) {
            (Some(account_id), Some(name), Some(kind)) => kept.push(Account {
                account_id,
                account_name: name.clone(),
                account_type: AccountType::parse(kind),
            }),
            _ => {
                debug!(row = index, "skipping incomplete account row");
                skipped.push(index);
            }
        }
    }

    Sanitized {
        rows: kept,
        skipped,
    }
}

/// Keep entry rows that have an id and an account; default the rest.
///
/// Blank debit/credit become zero and a blank date becomes
/// [`DEFAULT_ENTRY_DATE`]. The account reference is not checked here.
pub fn sanitize_entries(rows: &[EntryInput]) -> Sanitized<JournalEntry> {
    let mut kept = Vec::with_capacity(rows.len());
    let mut skipped = Vec::new();

    for (index, row) in rows.iter().enumerate() {
        let (Some(entry_id), Some(account_id)) = (row.entry_id, row.account_id) else {
            debug!(row = index, "skipping incomplete journal row");
            skipped.push(index);
            continue;
        };

        kept.push(JournalEntry {
            entry_id,
            account_id,
            entry_date: row
                .entry_date
                .clone()
                .unwrap_or_else(|| DEFAULT_ENTRY_DATE.to_string()),
            debit: row.debit.unwrap_or(Decimal::ZERO),
            credit: row.credit.unwrap_or(Decimal::ZERO),
        });
    }

    Sanitized {
        rows: kept,
        skipped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_account_missing_name_is_skipped() {
        let rows = vec![
            AccountInput::new(1, "Cash", "Asset"),
            AccountInput {
                account_name: None,
                ..AccountInput::new(2, "", "Asset")
            },
            AccountInput::new(3, "Owner Capital", "Equity"),
        ];

        let result = sanitize_accounts(&rows);
        assert_eq!(result.skipped, vec![1]);
        let ids: Vec<i64> = result.rows.iter().map(|a| a.account_id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_account_missing_id_or_type_is_skipped() {
        let rows = vec![
            AccountInput {
                account_id: None,
                ..AccountInput::new(0, "Cash", "Asset")
            },
            AccountInput {
                account_type: None,
                ..AccountInput::new(2, "Bank", "Asset")
            },
        ];
        let result = sanitize_accounts(&rows);
        assert!(result.rows.is_empty());
        assert_eq!(result.skipped, vec![0, 1]);
    }

    #[test]
    fn test_empty_name_is_kept() {
        // Blank is a value, only a missing cell is skipped.
        let result = sanitize_accounts(&[AccountInput::new(4, "", "Asset")]);
        assert_eq!(result.rows.len(), 1);
    }

    #[test]
    fn test_entry_defaults_are_filled() {
        let rows = vec![EntryInput {
            entry_id: Some(1),
            account_id: Some(1),
            ..EntryInput::default()
        }];

        let result = sanitize_entries(&rows);
        assert!(result.skipped.is_empty());
        let entry = &result.rows[0];
        assert_eq!(entry.entry_date, DEFAULT_ENTRY_DATE);
        assert_eq!(entry.debit, Decimal::ZERO);
        assert_eq!(entry.credit, Decimal::ZERO);
    }

    #[test]
    fn test_entry_without_account_is_skipped() {
        let rows = vec![
            EntryInput {
                account_id: None,
                ..EntryInput::new(1, 0, "2025-01-01", dec!(10), dec!(0))
            },
            EntryInput {
                entry_id: None,
                ..EntryInput::new(0, 1, "2025-01-01", dec!(10), dec!(0))
            },
            EntryInput::new(3, 1, "2025-01-02", dec!(0), dec!(10)),
        ];

        let result = sanitize_entries(&rows);
        assert_eq!(result.skipped, vec![0, 1]);
        assert_eq!(result.rows.len(), 1);
        assert_eq!(result.rows[0].credit, dec!(10));
    }

    #[test]
    fn test_inputs_deserialize_nulls_and_missing_cells() {
        let json = r#"[
            {"account_id": 1, "account_name": "Cash", "account_type": "Asset"},
            {"account_id": 2, "account_name": null, "account_type": "Asset"},
            {"account_id": 3}
        ]"#;
        let rows: Vec<AccountInput> = serde_json::from_str(json).unwrap();
        let result = sanitize_accounts(&rows);
        assert_eq!(result.rows.len(), 1);
        assert_eq!(result.skipped, vec![1, 2]);

        let json = r#"[{"entry_id": 1, "account_id": 1, "debit": 12.5, "credit": null}]"#;
        let rows: Vec<EntryInput> = serde_json::from_str(json).unwrap();
        let result = sanitize_entries(&rows);
        assert_eq!(result.rows[0].debit, dec!(12.5));
        assert_eq!(result.rows[0].credit, Decimal::ZERO);
    }
}
