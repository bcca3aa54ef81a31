use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;

use crate::error::{Result, StatementsError};
use crate::storage::types::{Account, AccountType, JournalEntry};

pub(super) struct AccountRow {
    pub(super) account_id: i64,
    pub(super) account_name: String,
    pub(super) account_type: String,
}

impl AccountRow {
    pub(super) fn from_sql(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            account_id: row.get(0)?,
            account_name: row.get(1)?,
            account_type: row.get(2)?,
        })
    }
}

impl From<AccountRow> for Account {
    fn from(row: AccountRow) -> Self {
        Account {
            account_id: row.account_id,
            account_name: row.account_name,
            account_type: AccountType::from(row.account_type),
        }
    }
}

pub(super) struct EntryRow {
    pub(super) entry_id: i64,
    pub(super) account_id: i64,
    pub(super) entry_date: String,
    pub(super) debit: f64,
    pub(super) credit: f64,
}

impl EntryRow {
    pub(super) fn from_sql(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            entry_id: row.get(0)?,
            account_id: row.get(1)?,
            entry_date: row.get(2)?,
            debit: row.get(3)?,
            credit: row.get(4)?,
        })
    }
}

impl TryFrom<EntryRow> for JournalEntry {
    type Error = StatementsError;

    fn try_from(row: EntryRow) -> Result<Self> {
        let debit = amount_from_sql(row.debit)
            .map_err(|e| StatementsError::Storage(format!("Entry {} debit: {}", row.entry_id, e)))?;
        let credit = amount_from_sql(row.credit).map_err(|e| {
            StatementsError::Storage(format!("Entry {} credit: {}", row.entry_id, e))
        })?;

        Ok(JournalEntry {
            entry_id: row.entry_id,
            account_id: row.account_id,
            entry_date: row.entry_date,
            debit,
            credit,
        })
    }
}

/// Convert a stored REAL amount to a decimal.
///
/// Uses the shortest decimal that round-trips through `f64`, so `0.1` stays
/// `0.1` rather than its exact binary expansion.
pub(super) fn amount_from_sql(value: f64) -> Result<Decimal> {
    Decimal::from_f64(value)
        .ok_or_else(|| StatementsError::Storage(format!("Invalid amount {}", value)))
}

/// Convert a decimal amount to the REAL column representation.
pub(super) fn amount_to_sql(value: Decimal) -> Result<f64> {
    value
        .to_f64()
        .ok_or_else(|| StatementsError::InvalidInput(format!("Amount out of range: {}", value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_amount_from_sql_keeps_short_form() {
        assert_eq!(amount_from_sql(0.1).unwrap(), dec!(0.1));
        assert_eq!(amount_from_sql(50000.0).unwrap(), dec!(50000));
    }

    #[test]
    fn test_amount_from_sql_rejects_nan() {
        assert!(amount_from_sql(f64::NAN).is_err());
    }

    #[test]
    fn test_amount_to_sql() {
        assert_eq!(amount_to_sql(dec!(12000.50)).unwrap(), 12000.5);
    }
}
