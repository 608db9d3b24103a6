//! Detection of managed (art) projects.

use crate::config::CONFIG_FILE_NAMES;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Decides whether a workspace root is an art project.
///
/// Nothing here is cached: deleting or recreating the config file is seen by
/// the very next call.
pub struct ProjectDetector;

impl ProjectDetector {
    /// True iff a conventional config file exists directly under `root`.
    pub fn is_managed_project(root: &Path) -> bool {
        Self::config_path(root).is_some()
    }

    /// The config file for `root`, preferring JSON over TOML.
    pub fn config_path(root: &Path) -> Option<PathBuf> {
        CONFIG_FILE_NAMES
            .iter()
            .map(|name| root.join(name))
            .find(|path| path.is_file())
    }

    pub fn is_config_file(path: &Path) -> bool {
        path.file_name().is_some_and(Self::is_config_file_name)
    }

    pub fn is_config_file_name(name: &OsStr) -> bool {
        CONFIG_FILE_NAMES.iter().any(|candidate| name == OsStr::new(candidate))
    }
}
