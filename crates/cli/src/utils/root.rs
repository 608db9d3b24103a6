use anyhow::{Context, Result};
use art_explorer_core::services::ProcessExecutor;
use art_explorer_core::{
    CommandDispatcher, CommandExecutor, ConfigStore, ProjectExplorer, Settings,
};
use std::env;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

use crate::host::{ConsoleMessageSink, DryRunExecutor};

/// Workspace root: explicit flag, then `PROJECT_ROOT`, then the current
/// directory.
pub fn resolve_root(explicit: Option<PathBuf>) -> Result<PathBuf> {
    let root = match explicit {
        Some(root) => root,
        None => match env::var_os("PROJECT_ROOT").filter(|v| !v.is_empty()) {
            Some(root) => PathBuf::from(root),
            None => env::current_dir().context("Failed to get current directory")?,
        },
    };

    let root = root
        .canonicalize()
        .with_context(|| format!("Failed to resolve workspace root {}", root.display()))?;
    debug!("Workspace root: {}", root.display());
    Ok(root)
}

/// Wire an explorer for `root` with the settings found there.
///
/// `dry_run` swaps process execution for printing the command line.
pub fn build_explorer(root: &Path, dry_run: bool) -> Result<ProjectExplorer> {
    let settings = Settings::for_workspace(root).context("Failed to load explorer settings")?;

    let executor: Arc<dyn CommandExecutor> = if dry_run {
        Arc::new(DryRunExecutor)
    } else {
        Arc::new(ProcessExecutor::attached(settings.shell.clone()))
    };

    Ok(ProjectExplorer::new(
        root,
        Arc::new(ConfigStore::with_settings(&settings)),
        CommandDispatcher::new(settings.tool_name.clone(), executor),
        Arc::new(ConsoleMessageSink),
    ))
}
