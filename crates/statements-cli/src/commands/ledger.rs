use crate::app::AppContext;
use crate::cli::{ApplyArgs, ConfirmArgs};
use crate::errors::CliError;
use crate::helpers::{confirm_destructive, read_account_grid, read_entry_grid};
use crate::output::print_json;
use crate::ui::{hint, print, receipt};

pub fn handle_seed(ctx: &AppContext, args: &ConfirmArgs) -> anyhow::Result<()> {
    let mut engine = ctx.open_engine()?;
    confirm_destructive(args, "seed", "Replace all ledger data with the demo ledger?")?;

    engine.seed()?;
    let snapshot = engine.snapshot()?;
    engine.close()?;

    if !ctx.quiet() {
        let ui = ctx.ui_context(false, None);
        print(
            &ui,
            &receipt(
                &ui,
                "Ledger reset to demo data",
                &[
                    ("Accounts", snapshot.accounts.len().to_string()),
                    ("Entries", snapshot.entries.len().to_string()),
                ],
            ),
        );
    }
    Ok(())
}

pub fn handle_clear(ctx: &AppContext, args: &ConfirmArgs) -> anyhow::Result<()> {
    let mut engine = ctx.open_engine()?;
    confirm_destructive(args, "clear", "Delete every account and journal entry?")?;

    engine.clear()?;
    engine.close()?;

    if !ctx.quiet() {
        let ui = ctx.ui_context(false, None);
        print(&ui, &receipt(&ui, "Ledger cleared", &[]));
        print(
            &ui,
            &hint(&ui, "statements apply --accounts FILE --entries FILE"),
        );
    }
    Ok(())
}

/// Replace the ledger with the rows of one or two grid files.
///
/// Both files are parsed before anything is asked or written. A missing
/// grid counts as an empty one.
pub fn handle_apply(ctx: &AppContext, args: &ApplyArgs) -> anyhow::Result<()> {
    if args.accounts.is_none() && args.entries.is_none() {
        return Err(CliError::invalid_input(
            "Nothing to apply\nHint: Pass --accounts FILE and --entries FILE, or use `statements clear` to empty the ledger.",
        )
        .into());
    }

    let accounts = match &args.accounts {
        Some(path) => read_account_grid(path)?,
        None => Vec::new(),
    };
    let entries = match &args.entries {
        Some(path) => read_entry_grid(path)?,
        None => Vec::new(),
    };

    let mut engine = ctx.open_engine()?;
    confirm_destructive(
        &args.confirm,
        "apply",
        &format!(
            "Replace the whole ledger with {} account rows and {} journal rows?",
            accounts.len(),
            entries.len()
        ),
    )?;

    let summary = engine.replace(&accounts, &entries)?;
    engine.close()?;

    if args.json {
        return print_json(&serde_json::to_value(summary)?);
    }
    if !ctx.quiet() {
        let ui = ctx.ui_context(false, None);
        print(
            &ui,
            &receipt(
                &ui,
                "Ledger replaced",
                &[
                    ("Accounts inserted", summary.accounts_inserted.to_string()),
                    ("Accounts skipped", summary.accounts_skipped.to_string()),
                    ("Entries inserted", summary.entries_inserted.to_string()),
                    ("Entries skipped", summary.entries_skipped.to_string()),
                ],
            ),
        );
        if summary.accounts_skipped + summary.entries_skipped > 0 {
            print(
                &ui,
                &hint(
                    &ui,
                    "Rows missing an id, account name/type or account reference are skipped.",
                ),
            );
        }
    }
    Ok(())
}
