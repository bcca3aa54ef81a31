use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use statements_core::VERSION;

/// Statements - trial balance, balance sheet and income statement from a SQLite ledger
#[derive(Parser)]
#[command(name = "statements")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the SQLite database
    #[arg(long, global = true, env = "STATEMENTS_DB", value_name = "PATH")]
    pub db: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Use ASCII symbols and table borders only
    #[arg(long, global = true)]
    pub ascii: bool,
}

/// Requested output format for report commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Tables on a terminal, plain text otherwise
    Table,
    /// Stable space-separated / key=value lines
    Plain,
}

/// Output flags shared by the read-only commands
#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_enum, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,
}

/// Arguments for commands that replace ledger data
#[derive(Args, Debug, Clone, Default)]
pub struct ConfirmArgs {
    /// Skip the confirmation prompt (required without a TTY)
    #[arg(short = 'y', long)]
    pub yes: bool,
}

/// Arguments for the `apply` command
#[derive(Args)]
pub struct ApplyArgs {
    /// Accounts grid file (.csv or .json)
    #[arg(long, value_name = "FILE")]
    pub accounts: Option<PathBuf>,

    /// Journal entries grid file (.csv or .json)
    #[arg(long, value_name = "FILE")]
    pub entries: Option<PathBuf>,

    #[command(flatten)]
    pub confirm: ConfirmArgs,

    /// Output the summary as JSON
    #[arg(long)]
    pub json: bool,
}

/// Which manual-entry grid a template describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Grid {
    Accounts,
    Entries,
}

/// Arguments for the `template` command
#[derive(Args)]
pub struct TemplateArgs {
    /// Grid to export
    #[arg(value_enum, value_name = "GRID")]
    pub grid: Grid,

    /// Write to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Arguments for the `trial-balance` command
#[derive(Args)]
pub struct TrialBalanceArgs {
    /// One row per account id, without sections
    #[arg(long)]
    pub short: bool,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

/// Arguments for `config init`
#[derive(Args)]
pub struct ConfigInitArgs {
    /// Overwrite an existing config file
    #[arg(long)]
    pub force: bool,
}

#[derive(Subcommand)]
pub enum ConfigSubcommand {
    /// Write a default config file
    Init(ConfigInitArgs),

    /// Show the resolved config and database paths
    Show(OutputArgs),
}

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigSubcommand,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the tables and load the demo ledger (replaces existing data)
    Init(ConfirmArgs),

    /// Create the ledger tables if missing (keeps existing data)
    Schema,

    /// Reset the ledger to the demo data
    Seed(ConfirmArgs),

    /// Delete every account and journal entry
    Clear(ConfirmArgs),

    /// Replace the ledger with manually entered grid files
    Apply(ApplyArgs),

    /// Print a manual-entry grid template as CSV
    Template(TemplateArgs),

    /// Trial balance grouped by account type
    #[command(visible_alias = "tb")]
    TrialBalance(TrialBalanceArgs),

    /// Balance sheet detail and totals
    #[command(visible_alias = "bs")]
    BalanceSheet(OutputArgs),

    /// Revenue, expense and net income
    #[command(visible_alias = "is")]
    IncomeStatement(OutputArgs),

    /// Per-account balances and the per-account trial balance
    Debug(OutputArgs),

    /// Check database integrity and whether the ledger balances
    Check(OutputArgs),

    /// Manage the config file
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}
