use anyhow::{Context, Result};
use art_explorer_core::TreeDataProvider;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};

use crate::display::{format_tree, tree_view};
use crate::utils::build_explorer;
use crate::watch::ConfigWatcher;

const SETTLE: Duration = Duration::from_millis(100);

pub fn watch_command(root: &Path) -> Result<()> {
    let explorer = build_explorer(root, true)?;
    let changes = explorer.subscribe();
    let watcher = ConfigWatcher::new(root)
        .with_context(|| format!("Failed to watch {}", root.display()))?;

    print_tree(&explorer);
    println!("\n👀 Watching for config changes (Ctrl+C to stop)...");

    while let Some(path) = watcher.next_change() {
        let extra = watcher.drain(SETTLE);
        debug!("Config change at {} (+{} coalesced)", path.display(), extra);

        if !explorer.on_config_changed(&path) {
            continue;
        }
        // one re-render per notification batch
        if changes.try_iter().count() > 0 {
            info!("Config changed: {}", path.display());
            println!();
            print_tree(&explorer);
        }
    }

    Ok(())
}

fn print_tree<P: TreeDataProvider>(provider: &P) {
    let views = tree_view(provider);
    if views.is_empty() {
        println!("❌ No modules");
    } else {
        println!("{}", format_tree(&views));
    }
}
