use anyhow::{Context, Result};
use art_explorer_core::palette::{CREATE_MODULE, CREATE_PROJECT};
use art_explorer_core::{PaletteCommand, PaletteOutcome};
use std::path::Path;

use crate::cli::CreateTarget;
use crate::display::print_command_breakdown;
use crate::utils::build_explorer;

pub fn create_command(root: &Path, target: CreateTarget, dry_run: bool) -> Result<()> {
    let command = match target {
        CreateTarget::Project { kind } => PaletteCommand::parse(CREATE_PROJECT, &[kind])?,
        CreateTarget::Module { name, kind } => {
            let mut args = vec![name];
            args.extend(kind);
            PaletteCommand::parse(CREATE_MODULE, &args)?
        }
    };

    let explorer = build_explorer(root, dry_run)?;
    let id = command.id();
    let outcome = command
        .execute(&explorer)
        .with_context(|| format!("{id} failed"))?;

    if let PaletteOutcome::Dispatched(cmd) = outcome {
        if dry_run {
            print_command_breakdown(&cmd);
        } else {
            println!("✅ Ran: {}", cmd);
        }
    }
    Ok(())
}
