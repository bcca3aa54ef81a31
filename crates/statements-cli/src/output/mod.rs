//! Report output for the CLI.
//!
//! - **json**: machine-readable envelopes for `--json`
//! - **text**: table rows for the plain and pretty modes

mod json;
mod text;

// Re-export public API
pub use json::{envelope, print_json};
pub use text::{
    account_balance_rows, balance_sheet_rows, trial_balance_footer, trial_balance_rows,
    trial_balance_short_rows,
};
