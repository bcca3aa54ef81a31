//! Tracing setup for the CLI.
//!
//! Logs go to stderr so they never mix with report output on stdout.

use tracing_subscriber::EnvFilter;

use crate::constants::LOG_ENV;

/// Install the global fmt subscriber.
///
/// `--verbose` forces `debug`; otherwise the filter comes from
/// `STATEMENTS_LOG`, falling back to `warn`. Safe to call more than once.
pub fn init(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
