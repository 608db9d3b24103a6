use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the optional per-workspace settings file.
pub const SETTINGS_FILE_NAME: &str = ".art-explorer.json";

pub const TOOL_ENV: &str = "ART_EXPLORER_TOOL";
pub const SHELL_ENV: &str = "ART_EXPLORER_SHELL";

/// Settings for the explorer itself, as opposed to the project config it
/// reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", default)]
pub struct Settings {
    /// Executable that receives `serve`/`build`/`create` commands.
    pub tool_name: String,
    /// Shell used to run the generated command lines.
    pub shell: String,
    /// Number of workspace roots whose parsed config is kept in memory.
    pub cache_capacity: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tool_name: "art".to_string(),
            shell: "sh".to_string(),
            cache_capacity: 16,
        }
    }
}

impl Settings {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        serde_json::from_str(&contents).map_err(|e| Error::config_load(path, e))
    }

    /// Settings for `root`: the workspace settings file if present, then
    /// environment overrides on top.
    pub fn for_workspace(root: &Path) -> Result<Self> {
        let path = Self::settings_path(root);
        let mut settings = if path.exists() {
            tracing::debug!("Loading explorer settings from {}", path.display());
            Self::load_from_file(&path)?
        } else {
            Self::default()
        };
        settings.apply_env(|key| std::env::var(key).ok());
        Ok(settings)
    }

    pub fn settings_path(root: &Path) -> PathBuf {
        root.join(SETTINGS_FILE_NAME)
    }

    fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(tool) = lookup(TOOL_ENV).filter(|v| !v.trim().is_empty()) {
            self.tool_name = tool;
        }
        if let Some(shell) = lookup(SHELL_ENV).filter(|v| !v.trim().is_empty()) {
            self.shell = shell;
        }
        if self.cache_capacity == 0 {
            self.cache_capacity = 1;
        }
    }
}
