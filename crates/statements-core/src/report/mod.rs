//! Accounting statements computed from a ledger snapshot.
//!
//! - **aggregate**: pure functions from a [`crate::storage::LedgerSnapshot`]
//!   to statement rows
//! - **types**: the statement row types handed to the presentation layer

pub mod aggregate;
mod types;

pub use aggregate::{
    account_balances, balance_sheet, income_statement_summary, normal_balance, split_balance,
    trial_balance_long, trial_balance_short, CURRENT_EARNINGS_LINE,
};
pub use types::{
    AccountBalance, AccountTrialBalance, BalanceSheet, BalanceSheetLine, BalanceSheetTotals,
    IncomeStatementSummary, TrialBalanceLine, TrialBalanceTotals,
};
