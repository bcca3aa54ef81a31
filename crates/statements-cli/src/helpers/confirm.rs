use dialoguer::Confirm;

use crate::cli::ConfirmArgs;
use crate::errors::CliError;
use crate::ui::UiContext;

/// Ask before a command replaces ledger data.
///
/// `--yes` skips the prompt. Without a TTY the prompt cannot be shown, so
/// `--yes` is required.
pub fn confirm_destructive(args: &ConfirmArgs, command: &str, prompt: &str) -> anyhow::Result<()> {
    if args.yes {
        return Ok(());
    }
    if !UiContext::is_interactive() {
        return Err(CliError::invalid_input(format!(
            "`statements {}` replaces ledger data and needs confirmation\nHint: Re-run with --yes to proceed without a TTY.",
            command
        ))
        .into());
    }

    let proceed = Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(|e| anyhow::anyhow!("Failed to read confirmation: {}", e))?;
    if !proceed {
        return Err(anyhow::anyhow!("Cancelled; the ledger was not changed"));
    }
    Ok(())
}
