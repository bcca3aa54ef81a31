use statements_core::report::TrialBalanceTotals;

use crate::app::AppContext;
use crate::cli::OutputArgs;
use crate::errors::CliError;
use crate::output::{envelope, print_json};
use crate::ui::{amount, badge, blank_line, header, kv, print, Badge};

/// Run SQLite's integrity checks, then verify that the ledger balances.
pub fn handle_check(ctx: &AppContext, args: &OutputArgs) -> anyhow::Result<()> {
    let engine = ctx.open_engine()?;
    let path = ctx.database_path()?;
    let ui = ctx.ui_context(args.json, args.format);

    if let Err(err) = engine.check_integrity() {
        return Err(CliError::integrity_failed(format!(
            "Integrity check failed: {}\nHint: Restore the database from a backup or rebuild it with `statements init`.",
            err
        ))
        .into());
    }

    let snapshot = engine.snapshot()?;
    let totals = TrialBalanceTotals::from_lines(&engine.trial_balance_long()?)?;
    let sheet = engine.balance_sheet_detail_and_totals()?;
    let total_debit = snapshot.total_debit()?;
    let total_credit = snapshot.total_credit()?;
    let entries_balanced = total_debit == total_credit;
    let balanced = entries_balanced && totals.is_balanced && sheet.totals.is_balanced();

    if ui.mode.is_json() {
        let data = serde_json::json!({
            "integrity": "ok",
            "accounts": snapshot.accounts.len(),
            "entries": snapshot.entries.len(),
            "total_debit": total_debit,
            "total_credit": total_credit,
            "trial_balance_balanced": totals.is_balanced,
            "balance_difference": sheet.totals.balance_difference,
            "balanced": balanced,
        });
        print_json(&envelope("check", &path, &data)?)?;
    } else if !ctx.quiet() {
        print(&ui, &header(&ui, "check", path.to_str()));
        blank_line(&ui);
        print(&ui, &kv(&ui, "Integrity", "ok"));
        print(&ui, &kv(&ui, "Accounts", &snapshot.accounts.len().to_string()));
        print(&ui, &kv(&ui, "Entries", &snapshot.entries.len().to_string()));
        print(&ui, &kv(&ui, "Total Debit", &amount(&ui, total_debit)));
        print(&ui, &kv(&ui, "Total Credit", &amount(&ui, total_credit)));
        print(
            &ui,
            &kv(&ui, "Balance Difference", &amount(&ui, sheet.totals.balance_difference)),
        );
        if ui.mode.is_pretty() && balanced {
            blank_line(&ui);
            print(&ui, &badge(&ui, Badge::Ok, "Ledger is consistent"));
        }
    }

    if !balanced {
        return Err(CliError::integrity_failed(format!(
            "Ledger does not balance: debits {} vs credits {}\nHint: Review the journal with `statements debug`.",
            total_debit, total_credit
        ))
        .into());
    }
    Ok(())
}
