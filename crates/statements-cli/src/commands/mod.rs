//! Command handlers, one per subcommand.

pub mod ledger;
pub mod maintenance;
pub mod misc;
pub mod reports;
pub mod setup;
