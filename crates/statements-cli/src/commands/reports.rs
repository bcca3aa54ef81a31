//! Read-only report commands.

use statements_core::report::{BalanceSheet, IncomeStatementSummary, TrialBalanceTotals};

use crate::app::AppContext;
use crate::cli::{OutputArgs, TrialBalanceArgs};
use crate::output::{
    account_balance_rows, balance_sheet_rows, envelope, print_json, trial_balance_footer,
    trial_balance_rows, trial_balance_short_rows,
};
use crate::ui::{
    amount, badge, blank_line, header, hint, kv, print, section, table, Badge, Column, UiContext,
};

fn balanced_badge(ui: &UiContext, balanced: bool, ok: &str, off: &str) -> String {
    if balanced {
        badge(ui, Badge::Ok, ok)
    } else {
        badge(ui, Badge::Warn, off)
    }
}

pub fn handle_trial_balance(ctx: &AppContext, args: &TrialBalanceArgs) -> anyhow::Result<()> {
    let engine = ctx.open_engine()?;
    let path = ctx.database_path()?;
    let ui = ctx.ui_context(args.output.json, args.output.format);

    if args.short {
        let rows = engine.trial_balance_short()?;
        let totals = TrialBalanceTotals::from_accounts(&rows)?;

        if ui.mode.is_json() {
            let data = serde_json::json!({ "rows": rows, "totals": totals });
            return print_json(&envelope("trial_balance_short", &path, &data)?);
        }

        print(&ui, &header(&ui, "trial-balance --short", path.to_str()));
        blank_line(&ui);
        let columns = [
            Column::left("Id"),
            Column::left("Account"),
            Column::left("Type"),
            Column::right("Debit"),
            Column::right("Credit"),
        ];
        let footer = trial_balance_footer(&ui, &totals, 3);
        print(
            &ui,
            &table(&ui, &columns, &trial_balance_short_rows(&ui, &rows), Some(&footer)),
        );
        if ui.mode.is_pretty() {
            blank_line(&ui);
            print(
                &ui,
                &balanced_badge(
                    &ui,
                    totals.is_balanced,
                    "Debits equal credits",
                    "Debits and credits differ",
                ),
            );
        }
        return Ok(());
    }

    let lines = engine.trial_balance_long()?;
    let totals = TrialBalanceTotals::from_lines(&lines)?;

    if ui.mode.is_json() {
        let data = serde_json::json!({ "lines": lines, "totals": totals });
        return print_json(&envelope("trial_balance", &path, &data)?);
    }

    print(&ui, &header(&ui, "trial-balance", path.to_str()));
    blank_line(&ui);
    let columns = [
        Column::left("Section"),
        Column::left("Account"),
        Column::right("Debit"),
        Column::right("Credit"),
    ];
    let footer = trial_balance_footer(&ui, &totals, 2);
    print(
        &ui,
        &table(&ui, &columns, &trial_balance_rows(&ui, &lines), Some(&footer)),
    );
    if ui.mode.is_pretty() {
        blank_line(&ui);
        print(
            &ui,
            &balanced_badge(
                &ui,
                totals.is_balanced,
                "Debits equal credits",
                "Debits and credits differ",
            ),
        );
        if lines.is_empty() {
            print(
                &ui,
                &hint(&ui, "The ledger is empty. Run `statements seed` or `statements apply`."),
            );
        }
    } else {
        print(&ui, &kv(&ui, "balanced", &totals.is_balanced.to_string()));
    }
    Ok(())
}

fn balance_sheet_totals(ui: &UiContext, sheet: &BalanceSheet) -> Vec<String> {
    let totals = &sheet.totals;
    vec![
        kv(ui, "Total Assets", &amount(ui, totals.total_assets)),
        kv(ui, "Total Liabilities", &amount(ui, totals.total_liabilities)),
        kv(ui, "Current Earnings", &amount(ui, totals.current_earnings)),
        kv(ui, "Total Equity", &amount(ui, totals.total_equity)),
        kv(
            ui,
            "Total Liabilities and Equity",
            &amount(ui, totals.liabilities_and_equity()),
        ),
        kv(ui, "Balance Difference", &amount(ui, totals.balance_difference)),
    ]
}

pub fn handle_balance_sheet(ctx: &AppContext, args: &OutputArgs) -> anyhow::Result<()> {
    let engine = ctx.open_engine()?;
    let path = ctx.database_path()?;
    let ui = ctx.ui_context(args.json, args.format);
    let sheet = engine.balance_sheet_detail_and_totals()?;

    if ui.mode.is_json() {
        let data = serde_json::json!({
            "detail": sheet.detail,
            "totals": sheet.totals,
            "is_balanced": sheet.totals.is_balanced(),
        });
        return print_json(&envelope("balance_sheet", &path, &data)?);
    }

    print(&ui, &header(&ui, "balance-sheet", path.to_str()));
    blank_line(&ui);
    let columns = [
        Column::left("Section"),
        Column::left("Account"),
        Column::right("Balance"),
    ];
    print(
        &ui,
        &table(&ui, &columns, &balance_sheet_rows(&ui, &sheet.detail), None),
    );
    blank_line(&ui);
    for line in balance_sheet_totals(&ui, &sheet) {
        print(&ui, &line);
    }
    if ui.mode.is_pretty() {
        blank_line(&ui);
        print(
            &ui,
            &balanced_badge(
                &ui,
                sheet.totals.is_balanced(),
                "Assets equal liabilities and equity",
                "Assets differ from liabilities and equity",
            ),
        );
    }
    Ok(())
}

fn income_lines(ui: &UiContext, summary: &IncomeStatementSummary) -> Vec<String> {
    vec![
        kv(ui, "Total Revenue", &amount(ui, summary.total_revenue)),
        kv(ui, "Total Expense", &amount(ui, summary.total_expense)),
        kv(ui, "Net Income", &amount(ui, summary.net_income)),
    ]
}

/// Revenue, expense and net income.
///
/// With no revenue or expense entries there is no summary row: JSON
/// carries `null` data and the text modes say so.
pub fn handle_income_statement(ctx: &AppContext, args: &OutputArgs) -> anyhow::Result<()> {
    let engine = ctx.open_engine()?;
    let path = ctx.database_path()?;
    let ui = ctx.ui_context(args.json, args.format);
    let summary = engine.income_statement_summary()?;

    if ui.mode.is_json() {
        return print_json(&envelope("income_statement", &path, &summary)?);
    }

    print(&ui, &header(&ui, "income-statement", path.to_str()));
    blank_line(&ui);
    match summary {
        Some(summary) => {
            for line in income_lines(&ui, &summary) {
                print(&ui, &line);
            }
        }
        None => {
            if ui.mode.is_pretty() {
                print(&ui, &badge(&ui, Badge::Info, "No revenue or expense entries"));
            } else {
                print(&ui, &kv(&ui, "count", "0"));
            }
        }
    }
    Ok(())
}

pub fn handle_debug(ctx: &AppContext, args: &OutputArgs) -> anyhow::Result<()> {
    let engine = ctx.open_engine()?;
    let path = ctx.database_path()?;
    let ui = ctx.ui_context(args.json, args.format);
    let balances = engine.account_balances()?;
    let short = engine.trial_balance_short()?;

    if ui.mode.is_json() {
        let data = serde_json::json!({
            "account_balances": balances,
            "trial_balance_short": short,
        });
        return print_json(&envelope("debug", &path, &data)?);
    }

    print(&ui, &header(&ui, "debug", path.to_str()));
    blank_line(&ui);
    print(&ui, &section(&ui, "Account Balances"));
    let columns = [
        Column::left("Id"),
        Column::left("Account"),
        Column::left("Type"),
        Column::right("Debit"),
        Column::right("Credit"),
        Column::right("Balance"),
    ];
    print(
        &ui,
        &table(&ui, &columns, &account_balance_rows(&ui, &balances), None),
    );
    blank_line(&ui);

    print(&ui, &section(&ui, "Trial Balance Short"));
    let columns = [
        Column::left("Id"),
        Column::left("Account"),
        Column::left("Type"),
        Column::right("Debit"),
        Column::right("Credit"),
    ];
    print(
        &ui,
        &table(&ui, &columns, &trial_balance_short_rows(&ui, &short), None),
    );
    Ok(())
}
