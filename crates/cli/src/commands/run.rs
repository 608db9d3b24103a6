use anyhow::{Context, Result};
use art_explorer_core::{Action, Error, PaletteCommand, PaletteOutcome};
use std::path::Path;
use tracing::{debug, info};

use crate::display::print_command_breakdown;
use crate::utils::build_explorer;

pub fn run_command(root: &Path, action: &str, module: &str, dry_run: bool) -> Result<()> {
    let action: Action = action.parse()?;
    debug!("Running {} for module {}", action, module);

    let explorer = build_explorer(root, dry_run)?;
    if !explorer.is_managed_project() {
        anyhow::bail!(Error::NotManaged(root.to_path_buf()));
    }

    let known = explorer.modules().iter().any(|node| node.label == module);
    if !known {
        info!("Module {module:?} is not listed in the config; running anyway");
    }

    let command = PaletteCommand::Run {
        action,
        module: module.to_string(),
    };
    match command.execute(&explorer) {
        Ok(PaletteOutcome::Dispatched(cmd)) => {
            if dry_run {
                print_command_breakdown(&cmd);
            }
            Ok(())
        }
        Ok(PaletteOutcome::Refreshed) => Ok(()),
        Err(Error::CommandFailed { command, code }) => {
            eprintln!("❌ `{command}` exited with {code:?}");
            std::process::exit(code.unwrap_or(1));
        }
        Err(e) => Err(e).with_context(|| format!("Failed to {action} {module}")),
    }
}
