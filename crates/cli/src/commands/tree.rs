use anyhow::Result;
use std::path::Path;
use tracing::debug;

use crate::display::{format_tree, tree_view};
use crate::utils::build_explorer;

pub fn tree_command(root: &Path, json: bool) -> Result<()> {
    debug!("Printing tree for {}", root.display());

    let explorer = build_explorer(root, true)?;
    let views = tree_view(&explorer);

    if json {
        println!("{}", serde_json::to_string_pretty(&views)?);
        return Ok(());
    }

    if !explorer.is_managed_project() {
        return Ok(());
    }

    println!("🌲 Modules in {}", root.display());
    println!("{}", "=".repeat(80));
    if views.is_empty() {
        println!("❌ No webpack entries found in the config.");
    } else {
        println!("{}", format_tree(&views));
    }
    Ok(())
}
