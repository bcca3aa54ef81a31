use statements_core::LedgerEngine;

use crate::app::{resolve_config_path, resolve_database_path, AppContext};
use crate::cli::{ConfigInitArgs, ConfirmArgs, OutputArgs};
use crate::config::{write_config, StatementsConfig};
use crate::constants::LOG_ENV;
use crate::errors::CliError;
use crate::helpers::confirm_destructive;
use crate::output::{envelope, print_json};
use crate::ui::{hint, kv, print, receipt};

fn ledger_counts(engine: &LedgerEngine) -> anyhow::Result<(String, String)> {
    let snapshot = engine.snapshot()?;
    Ok((
        snapshot.accounts.len().to_string(),
        snapshot.entries.len().to_string(),
    ))
}

/// Create the tables and load the demo ledger.
///
/// A database that does not exist yet holds nothing to lose, so the
/// confirmation is only asked for an existing file.
pub fn handle_init(ctx: &AppContext, args: &ConfirmArgs) -> anyhow::Result<()> {
    let path = ctx.database_path()?;
    if path.exists() {
        confirm_destructive(
            args,
            "init",
            &format!(
                "Replace all data in {} with the demo ledger?",
                path.display()
            ),
        )?;
    }

    let (mut engine, path) = ctx.create_engine()?;
    engine.init()?;
    let (accounts, entries) = ledger_counts(&engine)?;
    engine.close()?;

    if !ctx.quiet() {
        let ui = ctx.ui_context(false, None);
        print(
            &ui,
            &receipt(
                &ui,
                "Initialized demo ledger",
                &[
                    ("Database", path.display().to_string()),
                    ("Accounts", accounts),
                    ("Entries", entries),
                ],
            ),
        );
        print(&ui, &hint(&ui, "statements trial-balance"));
    }
    Ok(())
}

/// Create missing tables without touching existing rows.
pub fn handle_schema(ctx: &AppContext) -> anyhow::Result<()> {
    let (mut engine, path) = ctx.create_engine()?;
    engine.ensure_schema()?;
    let (accounts, entries) = ledger_counts(&engine)?;
    engine.close()?;

    if !ctx.quiet() {
        let ui = ctx.ui_context(false, None);
        print(
            &ui,
            &receipt(
                &ui,
                "Schema ready",
                &[
                    ("Database", path.display().to_string()),
                    ("Accounts", accounts),
                    ("Entries", entries),
                ],
            ),
        );
    }
    Ok(())
}

pub fn handle_config_init(ctx: &AppContext, args: &ConfigInitArgs) -> anyhow::Result<()> {
    let config_path = resolve_config_path()?;
    if config_path.exists() && !args.force {
        return Err(CliError::invalid_input(format!(
            "Config already exists at {}\nHint: Re-run with --force to overwrite it.",
            config_path.display()
        ))
        .into());
    }

    // Only `--db` / STATEMENTS_DB or the default; never the file being replaced.
    let database_path = resolve_database_path(ctx.cli(), &StatementsConfig::default())?;
    write_config(&config_path, &StatementsConfig::new(database_path.clone()))?;

    if !ctx.quiet() {
        let ui = ctx.ui_context(false, None);
        print(
            &ui,
            &receipt(
                &ui,
                "Wrote config",
                &[
                    ("Config", config_path.display().to_string()),
                    ("Database", database_path.display().to_string()),
                ],
            ),
        );
    }
    Ok(())
}

pub fn handle_config_show(ctx: &AppContext, args: &OutputArgs) -> anyhow::Result<()> {
    let config_path = resolve_config_path()?;
    let database_path = ctx.database_path()?;
    let ui = ctx.ui_context(args.json, args.format);

    if ui.mode.is_json() {
        let data = serde_json::json!({
            "config_path": config_path.display().to_string(),
            "config_exists": config_path.exists(),
            "database_path": database_path.display().to_string(),
            "database_exists": database_path.exists(),
        });
        return print_json(&envelope("config", &database_path, &data)?);
    }

    let exists = |found: bool| if found { "yes" } else { "no" };
    print(&ui, &kv(&ui, "Config", &config_path.display().to_string()));
    print(&ui, &kv(&ui, "Config exists", exists(config_path.exists())));
    print(&ui, &kv(&ui, "Database", &database_path.display().to_string()));
    print(&ui, &kv(&ui, "Database exists", exists(database_path.exists())));
    if ui.mode.is_pretty() {
        print(
            &ui,
            &hint(&ui, &format!("Set {}=debug for diagnostic logs.", LOG_ENV)),
        );
    }
    Ok(())
}
