//! Statement row types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::amount;
use crate::error::Result;
use crate::storage::AccountType;

/// One line of the sectioned trial balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialBalanceLine {
    /// Display section ("Assets", "Liabilities", ...)
    pub section: String,
    pub account_name: String,
    /// Positive balance, or zero
    pub debit: Decimal,
    /// Magnitude of a negative balance, or zero
    pub credit: Decimal,
}

/// Column totals of a trial balance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialBalanceTotals {
    pub total_debit: Decimal,
    pub total_credit: Decimal,
    /// Whether the debit and credit columns agree
    pub is_balanced: bool,
}

impl TrialBalanceTotals {
    /// Sum `(debit, credit)` columns.
    pub fn from_amounts<I>(rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Decimal, Decimal)>,
    {
        let mut total_debit = Decimal::ZERO;
        let mut total_credit = Decimal::ZERO;
        for (debit, credit) in rows {
            total_debit = amount::add(total_debit, debit)?;
            total_credit = amount::add(total_credit, credit)?;
        }
        Ok(Self {
            total_debit,
            total_credit,
            is_balanced: total_debit == total_credit,
        })
    }

    /// Totals of the sectioned trial balance.
    pub fn from_lines(lines: &[TrialBalanceLine]) -> Result<Self> {
        Self::from_amounts(lines.iter().map(|l| (l.debit, l.credit)))
    }

    /// Totals of the per-account trial balance.
    ///
    /// Accounts sharing a name and type are split separately here, so these
    /// can exceed the sectioned totals when their balances have opposite
    /// signs.
    pub fn from_accounts(rows: &[AccountTrialBalance]) -> Result<Self> {
        Self::from_amounts(rows.iter().map(|r| (r.debit, r.credit)))
    }
}

/// Per-account trial balance row (raw account type, no sections).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountTrialBalance {
    pub account_id: i64,
    pub account_name: String,
    pub account_type: AccountType,
    pub debit: Decimal,
    pub credit: Decimal,
}

/// Diagnostic per-account totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountBalance {
    pub account_id: i64,
    pub account_name: String,
    pub account_type: AccountType,
    pub total_debit: Decimal,
    pub total_credit: Decimal,
    /// `total_debit - total_credit`
    pub balance: Decimal,
}

/// One line of the balance sheet detail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceSheetLine {
    /// "Assets", "Liabilities" or "Equity"
    pub section: String,
    pub account_name: String,
    /// Balance on the section's normal side; negative when abnormal
    pub balance: Decimal,
}

/// Balance sheet section totals. Always present, zero when empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceSheetTotals {
    pub total_assets: Decimal,
    pub total_liabilities: Decimal,
    /// Equity accounts plus current earnings
    pub total_equity: Decimal,
    /// Unclosed revenue minus expense, carried in equity
    pub current_earnings: Decimal,
    /// `total_assets - (total_liabilities + total_equity)`
    pub balance_difference: Decimal,
}

impl BalanceSheetTotals {
    pub fn liabilities_and_equity(&self) -> Decimal {
        self.total_liabilities + self.total_equity
    }

    pub fn is_balanced(&self) -> bool {
        self.balance_difference.is_zero()
    }
}

/// Balance sheet detail lines and totals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceSheet {
    pub detail: Vec<BalanceSheetLine>,
    pub totals: BalanceSheetTotals,
}

/// Income statement summary row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeStatementSummary {
    pub total_revenue: Decimal,
    pub total_expense: Decimal,
    /// `total_revenue - total_expense`
    pub net_income: Decimal,
}
