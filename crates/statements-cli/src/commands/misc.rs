use std::fs::File;
use std::io::BufWriter;

use clap::CommandFactory;
use clap_complete::generate;

use crate::app::AppContext;
use crate::cli::{Cli, CompletionsArgs, TemplateArgs};
use crate::helpers::write_template;
use crate::ui::{print, receipt};

pub fn handle_completions(args: &CompletionsArgs) -> anyhow::Result<()> {
    let mut cmd = Cli::command();
    generate(args.shell, &mut cmd, "statements", &mut std::io::stdout());
    Ok(())
}

pub fn handle_template(ctx: &AppContext, args: &TemplateArgs) -> anyhow::Result<()> {
    let Some(path) = &args.output else {
        return write_template(args.grid, std::io::stdout().lock());
    };

    let file = File::create(path)
        .map_err(|e| anyhow::anyhow!("Failed to create {}: {}", path.display(), e))?;
    write_template(args.grid, BufWriter::new(file))?;

    if !ctx.quiet() {
        let ui = ctx.ui_context(false, None);
        print(
            &ui,
            &receipt(&ui, "Template written", &[("File", path.display().to_string())]),
        );
    }
    Ok(())
}
