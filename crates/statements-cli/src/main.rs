//! Statements CLI - accounting statements from a SQLite ledger
//!
//! Prints the trial balance, balance sheet and income statement of an
//! `accounts` / `journal_entries` database, and manages its data.

use clap::Parser;

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;
mod logging;
mod output;
mod ui;

use app::AppContext;
use cli::{Cli, Commands, ConfigSubcommand};
use commands::{ledger, maintenance, misc, reports, setup};
use statements_core::VERSION;
use ui::print_error;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let ctx = AppContext::new(&cli);

    if let Err(e) = run(&ctx, &cli) {
        let ui_ctx = ctx.ui_context(false, None);
        let (message, hint) = split_error_hint(&format!("{:#}", e));
        print_error(&ui_ctx, &message, hint.as_deref());
        std::process::exit(errors::exit_code_for(&e));
    }
}

/// Separate an embedded "Hint:" line from the error message, or pick a
/// contextual hint for common SQLite failures.
fn split_error_hint(error: &str) -> (String, Option<String>) {
    if let Some(idx) = error.find("\nHint:") {
        let hint = error[idx + "\nHint:".len()..].trim().to_string();
        return (error[..idx].to_string(), Some(hint));
    }

    let error_lower = error.to_lowercase();
    let hint = if error_lower.contains("no such table") {
        Some("Run `statements schema` to create the tables, or `statements init` for demo data.")
    } else if error_lower.contains("foreign key") {
        Some("Every journal row must reference an account id from the accounts grid.")
    } else if error_lower.contains("constraint") {
        Some("Check for duplicate ids or negative amounts in the input.")
    } else if error_lower.contains("database is locked") {
        Some("Another process holds the database; retry once it finishes.")
    } else if error_lower.contains("not a database") {
        Some("Point --db at a SQLite file, or create one with `statements init`.")
    } else {
        None
    };
    (error.to_string(), hint.map(str::to_string))
}

fn run(ctx: &AppContext, cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Some(Commands::Init(args)) => {
            setup::handle_init(ctx, args)?;
        }
        Some(Commands::Schema) => {
            setup::handle_schema(ctx)?;
        }
        Some(Commands::Seed(args)) => {
            ledger::handle_seed(ctx, args)?;
        }
        Some(Commands::Clear(args)) => {
            ledger::handle_clear(ctx, args)?;
        }
        Some(Commands::Apply(args)) => {
            ledger::handle_apply(ctx, args)?;
        }
        Some(Commands::Template(args)) => {
            misc::handle_template(ctx, args)?;
        }
        Some(Commands::TrialBalance(args)) => {
            reports::handle_trial_balance(ctx, args)?;
        }
        Some(Commands::BalanceSheet(args)) => {
            reports::handle_balance_sheet(ctx, args)?;
        }
        Some(Commands::IncomeStatement(args)) => {
            reports::handle_income_statement(ctx, args)?;
        }
        Some(Commands::Debug(args)) => {
            reports::handle_debug(ctx, args)?;
        }
        Some(Commands::Check(args)) => {
            maintenance::handle_check(ctx, args)?;
        }
        Some(Commands::Config(args)) => match &args.command {
            ConfigSubcommand::Init(init_args) => {
                setup::handle_config_init(ctx, init_args)?;
            }
            ConfigSubcommand::Show(show_args) => {
                setup::handle_config_show(ctx, show_args)?;
            }
        },
        Some(Commands::Completions(args)) => {
            misc::handle_completions(args)?;
        }
        None => {
            println!("Statements v{}", VERSION);
            println!("\nQuickstart:");
            println!("  statements init --yes");
            println!("  statements trial-balance");
            println!("  statements balance-sheet");
            println!("  statements income-statement --json");
            println!("\nRun `statements --help` for full usage.");
        }
    }

    Ok(())
}
