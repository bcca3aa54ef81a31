//! Pure statement computations over a [`LedgerSnapshot`].
//!
//! Balances follow the debit-minus-credit convention. Only accounts with at
//! least one journal entry take part in any statement. Every sum is
//! overflow-checked and fails with [`StatementsError::InvalidInput`].
//!
//! [`StatementsError::InvalidInput`]: crate::StatementsError::InvalidInput

use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, HashMap};

use rust_decimal::Decimal;

use super::types::{
    AccountBalance, AccountTrialBalance, BalanceSheet, BalanceSheetLine, BalanceSheetTotals,
    IncomeStatementSummary, TrialBalanceLine,
};
use crate::amount;
use crate::error::Result;
use crate::storage::{Account, AccountType, LedgerSnapshot};

/// Name of the synthetic equity line carrying unclosed earnings.
pub const CURRENT_EARNINGS_LINE: &str = "Current Earnings";

struct AccountTotals<'a> {
    account: &'a Account,
    total_debit: Decimal,
    total_credit: Decimal,
}

impl AccountTotals<'_> {
    fn balance(&self) -> Result<Decimal> {
        amount::sub(self.total_debit, self.total_credit)
    }
}

/// Balance of every account sharing a name and type.
struct NamedBalance {
    account_type: AccountType,
    account_name: String,
    balance: Decimal,
}

fn account_totals(snapshot: &LedgerSnapshot) -> Result<Vec<AccountTotals<'_>>> {
    let mut sums: HashMap<i64, (Decimal, Decimal)> = HashMap::new();
    for entry in &snapshot.entries {
        let sum = sums.entry(entry.account_id).or_default();
        sum.0 = amount::add(sum.0, entry.debit)?;
        sum.1 = amount::add(sum.1, entry.credit)?;
    }

    Ok(snapshot
        .accounts
        .iter()
        .filter_map(|account| {
            sums.get(&account.account_id)
                .map(|&(total_debit, total_credit)| AccountTotals {
                    account,
                    total_debit,
                    total_credit,
                })
        })
        .collect())
}

/// Group by `(name, type)`, ordered by type rank then name.
fn named_balances<F>(totals: &[AccountTotals<'_>], keep: F) -> Result<Vec<NamedBalance>>
where
    F: Fn(&AccountType) -> bool,
{
    let mut grouped: BTreeMap<(u8, &str, &str), NamedBalance> = BTreeMap::new();
    for t in totals.iter().filter(|t| keep(&t.account.account_type)) {
        let account = t.account;
        let balance = t.balance()?;
        let key = (
            account.account_type.rank(),
            account.account_name.as_str(),
            account.account_type.as_str(),
        );
        match grouped.entry(key) {
            Entry::Occupied(mut slot) => {
                let group = slot.get_mut();
                group.balance = amount::add(group.balance, balance)?;
            }
            Entry::Vacant(slot) => {
                slot.insert(NamedBalance {
                    account_type: account.account_type.clone(),
                    account_name: account.account_name.clone(),
                    balance,
                });
            }
        }
    }

    Ok(grouped.into_values().collect())
}

/// Split a signed balance into `(debit, credit)`; at most one is non-zero.
pub fn split_balance(balance: Decimal) -> (Decimal, Decimal) {
    if balance >= Decimal::ZERO {
        (balance, Decimal::ZERO)
    } else {
        (Decimal::ZERO, -balance)
    }
}

/// Balance oriented to the account type's normal side.
///
/// Asset and expense accounts are debit-normal; liability, equity and revenue
/// accounts are credit-normal. Unknown types keep the raw sign.
pub fn normal_balance(account_type: &AccountType, balance: Decimal) -> Decimal {
    match account_type {
        AccountType::Liability | AccountType::Equity | AccountType::Revenue => -balance,
        AccountType::Asset | AccountType::Expense | AccountType::Other(_) => balance,
    }
}

/// Sectioned trial balance, one line per account name and type.
pub fn trial_balance_long(snapshot: &LedgerSnapshot) -> Result<Vec<TrialBalanceLine>> {
    let totals = account_totals(snapshot)?;
    Ok(named_balances(&totals, |_| true)?
        .into_iter()
        .map(|named| {
            let (debit, credit) = split_balance(named.balance);
            TrialBalanceLine {
                section: named.account_type.section().to_string(),
                account_name: named.account_name,
                debit,
                credit,
            }
        })
        .collect())
}

/// Per-account trial balance ordered by account name.
pub fn trial_balance_short(snapshot: &LedgerSnapshot) -> Result<Vec<AccountTrialBalance>> {
    let mut totals = account_totals(snapshot)?;
    totals.sort_by(|a, b| {
        (&a.account.account_name, a.account.account_id)
            .cmp(&(&b.account.account_name, b.account.account_id))
    });

    totals
        .iter()
        .map(|t| {
            let (debit, credit) = split_balance(t.balance()?);
            Ok(AccountTrialBalance {
                account_id: t.account.account_id,
                account_name: t.account.account_name.clone(),
                account_type: t.account.account_type.clone(),
                debit,
                credit,
            })
        })
        .collect()
}

/// Diagnostic totals per account, ordered by raw type name then account name.
pub fn account_balances(snapshot: &LedgerSnapshot) -> Result<Vec<AccountBalance>> {
    let mut totals = account_totals(snapshot)?;
    totals.sort_by(|a, b| {
        (
            a.account.account_type.as_str(),
            &a.account.account_name,
            a.account.account_id,
        )
            .cmp(&(
                b.account.account_type.as_str(),
                &b.account.account_name,
                b.account.account_id,
            ))
    });

    totals
        .iter()
        .map(|t| {
            Ok(AccountBalance {
                account_id: t.account.account_id,
                account_name: t.account.account_name.clone(),
                account_type: t.account.account_type.clone(),
                total_debit: t.total_debit,
                total_credit: t.total_credit,
                balance: t.balance()?,
            })
        })
        .collect()
}

fn summarize_income(totals: &[AccountTotals<'_>]) -> Result<Option<IncomeStatementSummary>> {
    let named = named_balances(totals, AccountType::is_income_statement)?;
    if named.is_empty() {
        return Ok(None);
    }

    let mut total_revenue = Decimal::ZERO;
    let mut total_expense = Decimal::ZERO;
    for line in &named {
        match line.account_type {
            AccountType::Revenue => total_revenue = amount::sub(total_revenue, line.balance)?,
            AccountType::Expense => total_expense = amount::add(total_expense, line.balance)?,
            _ => {}
        }
    }

    Ok(Some(IncomeStatementSummary {
        total_revenue,
        total_expense,
        net_income: amount::sub(total_revenue, total_expense)?,
    }))
}

/// Revenue, expense and net income.
///
/// Returns `None` when no revenue or expense account has entries.
pub fn income_statement_summary(
    snapshot: &LedgerSnapshot,
) -> Result<Option<IncomeStatementSummary>> {
    summarize_income(&account_totals(snapshot)?)
}

/// Balance sheet detail and section totals.
///
/// Liability and equity balances are shown credit-normal. Revenue and
/// expense activity not yet closed to equity is reported as a
/// [`CURRENT_EARNINGS_LINE`] equity line, so a balanced ledger of standard
/// account types always yields a zero `balance_difference`.
pub fn balance_sheet(snapshot: &LedgerSnapshot) -> Result<BalanceSheet> {
    let totals = account_totals(snapshot)?;

    let mut detail = Vec::new();
    let mut sheet = BalanceSheetTotals::default();
    for named in named_balances(&totals, AccountType::is_balance_sheet)? {
        let balance = normal_balance(&named.account_type, named.balance);
        let section_total = match named.account_type {
            AccountType::Asset => &mut sheet.total_assets,
            AccountType::Liability => &mut sheet.total_liabilities,
            _ => &mut sheet.total_equity,
        };
        *section_total = amount::add(*section_total, balance)?;
        detail.push(BalanceSheetLine {
            section: named.account_type.section().to_string(),
            account_name: named.account_name,
            balance,
        });
    }

    if let Some(income) = summarize_income(&totals)? {
        sheet.current_earnings = income.net_income;
        sheet.total_equity = amount::add(sheet.total_equity, income.net_income)?;
        detail.push(BalanceSheetLine {
            section: AccountType::Equity.section().to_string(),
            account_name: CURRENT_EARNINGS_LINE.to_string(),
            balance: income.net_income,
        });
    }

    sheet.balance_difference = amount::sub(
        sheet.total_assets,
        amount::add(sheet.total_liabilities, sheet.total_equity)?,
    )?;

    Ok(BalanceSheet {
        detail,
        totals: sheet,
    })
}
