use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tempfile::TempDir;

use statements_core::report::{BalanceSheetTotals, TrialBalanceTotals, CURRENT_EARNINGS_LINE};
use statements_core::sanitize::{AccountInput, EntryInput};
use statements_core::{LedgerEngine, StatementsError};

fn seeded_engine(dir: &TempDir) -> LedgerEngine {
    let mut engine =
        LedgerEngine::open(&dir.path().join("accounting.db")).expect("open should succeed");
    engine.init().expect("init should succeed");
    engine
}

#[test]
fn test_seeded_income_statement() {
    let dir = TempDir::new().unwrap();
    let engine = seeded_engine(&dir);

    let income = engine
        .income_statement_summary()
        .expect("query should succeed")
        .expect("seeded ledger has income activity");
    assert_eq!(income.total_revenue, dec!(43000));
    assert_eq!(income.total_expense, dec!(7000));
    assert_eq!(income.net_income, dec!(36000));
}

#[test]
fn test_seeded_trial_balance_is_balanced() {
    let dir = TempDir::new().unwrap();
    let engine = seeded_engine(&dir);

    let lines = engine.trial_balance_long().unwrap();
    let totals = TrialBalanceTotals::from_lines(&lines).unwrap();
    assert!(totals.is_balanced);
    assert_eq!(totals.total_debit, dec!(100000));

    for line in &lines {
        assert!(line.debit.is_zero() || line.credit.is_zero());
        assert!(line.debit >= Decimal::ZERO && line.credit >= Decimal::ZERO);
    }

    // Accounts without entries do not appear.
    assert!(!lines.iter().any(|l| l.account_name == "Notes Payable"));
    assert!(!lines.iter().any(|l| l.account_name == "Supplies Expense"));

    let mut sections: Vec<&str> = lines.iter().map(|l| l.section.as_str()).collect();
    sections.dedup();
    assert_eq!(
        sections,
        vec!["Assets", "Liabilities", "Equity", "Revenues", "Expenses"]
    );

    let payable = lines
        .iter()
        .find(|l| l.account_name == "Accounts Payable")
        .unwrap();
    assert_eq!(payable.debit, Decimal::ZERO);
    assert_eq!(payable.credit, dec!(7000));
}

#[test]
fn test_seeded_balance_sheet() {
    let dir = TempDir::new().unwrap();
    let engine = seeded_engine(&dir);

    let sheet = engine.balance_sheet_detail_and_totals().unwrap();
    assert_eq!(sheet.totals.total_assets, dec!(91000));
    assert_eq!(sheet.totals.total_liabilities, dec!(7000));
    assert_eq!(sheet.totals.current_earnings, dec!(36000));
    assert_eq!(sheet.totals.total_equity, dec!(84000));
    assert!(sheet.totals.is_balanced());

    let cash = sheet
        .detail
        .iter()
        .find(|l| l.account_name == "Cash")
        .unwrap();
    assert_eq!(cash.balance, dec!(44000));

    let last = sheet.detail.last().unwrap();
    assert_eq!(last.account_name, CURRENT_EARNINGS_LINE);
    assert!(!sheet
        .detail
        .iter()
        .any(|l| l.section == "Revenues" || l.section == "Expenses"));
}

#[test]
fn test_account_balances_sum_to_zero() {
    let dir = TempDir::new().unwrap();
    let engine = seeded_engine(&dir);

    let balances = engine.account_balances().unwrap();
    let sum: Decimal = balances.iter().map(|b| b.balance).sum();
    assert_eq!(sum, Decimal::ZERO);

    let short = engine.trial_balance_short().unwrap();
    assert_eq!(short.len(), balances.len());
    assert_eq!(short[0].account_name, "Accounts Payable");
}

#[test]
fn test_seed_twice_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let mut engine = seeded_engine(&dir);

    let first = engine.snapshot().unwrap();
    engine.seed().unwrap();
    let second = engine.snapshot().unwrap();

    assert_eq!(first, second);
    assert_eq!(second.accounts.len(), 13);
    assert_eq!(second.entries.len(), 18);
}

#[test]
fn test_ensure_schema_keeps_rows() {
    let dir = TempDir::new().unwrap();
    let mut engine = seeded_engine(&dir);

    engine.ensure_schema().unwrap();
    assert_eq!(engine.snapshot().unwrap().entries.len(), 18);
}

#[test]
fn test_clear_empties_every_statement() {
    let dir = TempDir::new().unwrap();
    let mut engine = seeded_engine(&dir);

    engine.clear().unwrap();

    assert!(engine.trial_balance_long().unwrap().is_empty());
    assert!(engine.income_statement_summary().unwrap().is_none());
    let sheet = engine.balance_sheet_detail_and_totals().unwrap();
    assert!(sheet.detail.is_empty());
    assert_eq!(sheet.totals.total_assets, Decimal::ZERO);
    assert_eq!(sheet.totals.balance_difference, Decimal::ZERO);
}

#[test]
fn test_replace_skips_incomplete_rows() {
    let dir = TempDir::new().unwrap();
    let mut engine = seeded_engine(&dir);

    let accounts = vec![
        AccountInput::new(1, "Cash", "Asset"),
        AccountInput {
            account_name: None,
            ..AccountInput::new(2, "", "Liability")
        },
        AccountInput::new(3, "Loan", "Liability"),
    ];
    let entries = vec![
        EntryInput::new(1, 1, "2025-03-01", dec!(12000), dec!(0)),
        EntryInput::new(2, 3, "2025-03-01", dec!(0), dec!(12000)),
        EntryInput {
            account_id: None,
            ..EntryInput::new(3, 0, "2025-03-02", dec!(5), dec!(0))
        },
    ];

    let summary = engine.replace(&accounts, &entries).unwrap();
    assert_eq!(summary.accounts_inserted, 2);
    assert_eq!(summary.accounts_skipped, 1);
    assert_eq!(summary.entries_inserted, 2);
    assert_eq!(summary.entries_skipped, 1);

    let snapshot = engine.snapshot().unwrap();
    assert_eq!(snapshot.accounts.len(), 2);
    assert!(!snapshot.accounts.iter().any(|a| a.account_id == 2));

    let lines = engine.trial_balance_long().unwrap();
    let loan = lines.iter().find(|l| l.account_name == "Loan").unwrap();
    assert_eq!(loan.section, "Liabilities");
    assert_eq!(loan.debit, Decimal::ZERO);
    assert_eq!(loan.credit, dec!(12000));
}

#[test]
fn test_replace_with_empty_grids_clears() {
    let dir = TempDir::new().unwrap();
    let mut engine = seeded_engine(&dir);

    let summary = engine.replace(&[], &[]).unwrap();
    assert_eq!(summary.accounts_inserted, 0);
    assert_eq!(summary.entries_inserted, 0);
    assert!(engine.snapshot().unwrap().is_empty());

    assert!(engine.trial_balance_long().unwrap().is_empty());
    assert!(engine.trial_balance_short().unwrap().is_empty());
    assert!(engine.income_statement_summary().unwrap().is_none());
    let sheet = engine.balance_sheet_detail_and_totals().unwrap();
    assert!(sheet.detail.is_empty());
    assert_eq!(sheet.totals, BalanceSheetTotals::default());
    assert!(sheet.totals.is_balanced());
}

#[test]
fn test_short_trial_balance_totals_per_account() {
    let mut engine = LedgerEngine::open_in_memory().unwrap();
    engine.ensure_schema().unwrap();

    let accounts = vec![
        AccountInput::new(1, "Cash", "Asset"),
        AccountInput::new(2, "Cash", "Asset"),
        AccountInput::new(3, "Capital", "Equity"),
    ];
    let entries = vec![
        EntryInput::new(1, 1, "2025-03-01", dec!(10), dec!(0)),
        EntryInput::new(2, 2, "2025-03-01", dec!(0), dec!(5)),
        EntryInput::new(3, 3, "2025-03-01", dec!(0), dec!(5)),
    ];
    engine.replace(&accounts, &entries).unwrap();

    let long = TrialBalanceTotals::from_lines(&engine.trial_balance_long().unwrap()).unwrap();
    assert_eq!(long.total_debit, dec!(5));

    let rows = engine.trial_balance_short().unwrap();
    assert_eq!(rows.len(), 3);
    let short = TrialBalanceTotals::from_accounts(&rows).unwrap();
    assert_eq!(short.total_debit, dec!(10));
    assert_eq!(short.total_credit, dec!(10));
    assert!(short.is_balanced);
}

#[test]
fn test_amounts_beyond_decimal_range_fail_queries() {
    let mut engine = LedgerEngine::open_in_memory().unwrap();
    engine.ensure_schema().unwrap();

    let big = dec!(50000000000000000000000000000);
    let accounts = vec![
        AccountInput::new(1, "Cash", "Asset"),
        AccountInput::new(2, "Capital", "Equity"),
    ];
    let entries = vec![
        EntryInput::new(1, 1, "2025-03-01", big, dec!(0)),
        EntryInput::new(2, 1, "2025-03-02", big, dec!(0)),
        EntryInput::new(3, 2, "2025-03-02", dec!(0), dec!(1)),
    ];
    engine.replace(&accounts, &entries).unwrap();

    let err = engine.trial_balance_long().unwrap_err();
    assert!(matches!(err, StatementsError::InvalidInput(_)));
    assert!(engine.trial_balance_short().is_err());
    assert!(engine.account_balances().is_err());
    assert!(engine.balance_sheet_detail_and_totals().is_err());
    assert!(engine.income_statement_summary().unwrap().is_none());
}

#[test]
fn test_replace_unknown_account_keeps_previous_ledger() {
    let dir = TempDir::new().unwrap();
    let mut engine = seeded_engine(&dir);
    let before = engine.snapshot().unwrap();

    let accounts = vec![AccountInput::new(1, "Cash", "Asset")];
    let entries = vec![EntryInput::new(1, 99, "2025-03-01", dec!(10), dec!(0))];

    let err = engine.replace(&accounts, &entries).unwrap_err();
    assert!(matches!(err, StatementsError::ConstraintViolation(_)));
    assert_eq!(engine.snapshot().unwrap(), before);
}

#[test]
fn test_data_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("accounting.db");

    let mut engine = LedgerEngine::open(&path).unwrap();
    engine.init().unwrap();
    engine.close().unwrap();

    let engine = LedgerEngine::open(&path).unwrap();
    assert_eq!(engine.snapshot().unwrap().accounts.len(), 13);
    engine.check_integrity().unwrap();
}

#[test]
fn test_query_before_schema_fails() {
    let dir = TempDir::new().unwrap();
    let engine = LedgerEngine::open(&dir.path().join("fresh.db")).unwrap();

    assert!(engine.trial_balance_long().is_err());
}

#[test]
fn test_open_unreachable_path_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing").join("accounting.db");

    let err = LedgerEngine::open(&path).err().expect("open should fail");
    assert!(matches!(err, StatementsError::ConnectionFailure(_)));
}
