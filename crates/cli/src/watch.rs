//! Config file watching on top of `notify`
//!
//! Watches every workspace directory outside `node_modules` and hidden
//! directories, and forwards modifications of any conventional config file
//! (`**/art.config.json`, `**/art.config.toml`). Creations and removals are
//! ignored; the explorer re-checks project membership on every root query
//! anyway. Directories created after the watcher starts are not picked up.

use art_explorer_core::ProjectDetector;
use notify::event::EventKind;
use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Component, Path, PathBuf};
use std::sync::mpsc::{self, Receiver};
use std::time::Duration;
use tracing::debug;
use walkdir::WalkDir;

pub struct ConfigWatcher {
    // dropping the watcher stops event delivery
    _watcher: RecommendedWatcher,
    rx: Receiver<PathBuf>,
}

impl ConfigWatcher {
    pub fn new(root: &Path) -> notify::Result<Self> {
        let (tx, rx) = mpsc::channel();
        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| match res {
                Ok(event) => {
                    if let Some(path) = config_change(&event) {
                        let _ = tx.send(path);
                    }
                }
                Err(e) => debug!("Watch error: {e}"),
            },
            Config::default(),
        )?;
        let dirs = watch_dirs(root);
        for dir in &dirs {
            watcher.watch(dir, RecursiveMode::NonRecursive)?;
        }
        debug!(
            "Watching {} ({} directories) for config changes",
            root.display(),
            dirs.len()
        );

        Ok(Self {
            _watcher: watcher,
            rx,
        })
    }

    /// Blocks until the next config modification. `None` once the watcher
    /// has shut down.
    pub fn next_change(&self) -> Option<PathBuf> {
        self.rx.recv().ok()
    }

    /// Discard changes that arrive within `window`; editors often emit
    /// several events for one save.
    pub fn drain(&self, window: Duration) -> usize {
        let mut drained = 0;
        while self.rx.recv_timeout(window).is_ok() {
            drained += 1;
        }
        drained
    }
}

/// Directories to register, `root` first. Dependency and hidden
/// directories are pruned so large JS workspaces stay within the
/// platform's watch limits.
pub fn watch_dirs(root: &Path) -> Vec<PathBuf> {
    WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_skipped_dir(e.file_name()))
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_dir())
        .map(|e| e.into_path())
        .collect()
}

fn is_skipped_dir(name: &std::ffi::OsStr) -> bool {
    name.to_str()
        .is_some_and(|name| name == "node_modules" || name.starts_with('.'))
}

/// The config file touched by `event`, if it is a modification of one.
pub fn config_change(event: &Event) -> Option<PathBuf> {
    if !matches!(event.kind, EventKind::Modify(_)) {
        return None;
    }
    event
        .paths
        .iter()
        .find(|path| ProjectDetector::is_config_file(path) && !is_dependency_path(path))
        .cloned()
}

fn is_dependency_path(path: &Path) -> bool {
    path.components()
        .any(|c| matches!(c, Component::Normal(name) if name == "node_modules"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use art_explorer_core::{CommandDispatcher, ConfigStore, ProjectExplorer};
    use notify::event::{CreateKind, DataChange, ModifyKind, RemoveKind};
    use std::fs;
    use std::sync::Arc;
    use tempfile::TempDir;

    use crate::host::{ConsoleMessageSink, DryRunExecutor};

    const DELIVERY: Duration = Duration::from_secs(5);

    fn event(kind: EventKind, path: &str) -> Event {
        Event::new(kind).add_path(PathBuf::from(path))
    }

    #[test]
    fn test_modification_of_config_is_forwarded() {
        let modify = EventKind::Modify(ModifyKind::Data(DataChange::Content));
        assert_eq!(
            config_change(&event(modify, "/w/art.config.json")),
            Some(PathBuf::from("/w/art.config.json"))
        );
        assert_eq!(
            config_change(&event(modify, "/w/packages/web/art.config.toml")),
            Some(PathBuf::from("/w/packages/web/art.config.toml"))
        );
    }

    #[test]
    fn test_create_and_remove_are_ignored() {
        assert_eq!(
            config_change(&event(
                EventKind::Create(CreateKind::File),
                "/w/art.config.json"
            )),
            None
        );
        assert_eq!(
            config_change(&event(
                EventKind::Remove(RemoveKind::File),
                "/w/art.config.json"
            )),
            None
        );
    }

    #[test]
    fn test_other_files_are_ignored() {
        let modify = EventKind::Modify(ModifyKind::Any);
        assert_eq!(config_change(&event(modify, "/w/package.json")), None);
        assert_eq!(
            config_change(&event(modify, "/w/node_modules/x/art.config.json")),
            None
        );
    }

    #[test]
    fn test_watch_dirs_skip_dependencies_and_hidden_dirs() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        for dir in ["web/src", "node_modules/pkg", ".git/objects"] {
            fs::create_dir_all(root.join(dir)).unwrap();
        }

        let mut dirs = watch_dirs(root);
        dirs.sort();
        assert_eq!(
            dirs,
            vec![root.to_path_buf(), root.join("web"), root.join("web/src")]
        );
    }

    #[test]
    fn test_edit_on_disk_reaches_the_tree() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        let config = root.join("art.config.json");
        fs::write(
            &config,
            r#"{"projectVirtualPath":"/src/modules","webpack":{"entry":{"/src/modules/a/index.js":"a"}}}"#,
        )
        .unwrap();

        let explorer = ProjectExplorer::new(
            root,
            Arc::new(ConfigStore::default()),
            CommandDispatcher::new("art", Arc::new(DryRunExecutor)),
            Arc::new(ConsoleMessageSink),
        );
        let labels = |explorer: &ProjectExplorer| -> Vec<String> {
            explorer.modules().into_iter().map(|m| m.label).collect()
        };
        assert_eq!(labels(&explorer), vec!["a/index.js"]);

        let watcher = ConfigWatcher::new(root).unwrap();
        fs::write(
            &config,
            r#"{"projectVirtualPath":"/src/modules","webpack":{"entry":{"/src/modules/a/index.js":"a","/src/modules/b/index.js":"b"}}}"#,
        )
        .unwrap();

        let changed = watcher.rx.recv_timeout(DELIVERY).unwrap();
        assert!(changed.ends_with("art.config.json"));
        watcher.drain(Duration::from_millis(200));

        assert!(explorer.on_config_changed(&changed));
        assert_eq!(labels(&explorer), vec!["a/index.js", "b/index.js"]);
    }

    #[test]
    fn test_drain_coalesces_burst_of_saves() {
        let temp = TempDir::new().unwrap();
        let config = temp.path().join("art.config.json");
        fs::write(&config, "{}").unwrap();

        let watcher = ConfigWatcher::new(temp.path()).unwrap();
        for i in 0..5 {
            fs::write(&config, format!(r#"{{"projectType":"spa-vue","n":{i}}}"#)).unwrap();
        }

        assert!(watcher.rx.recv_timeout(DELIVERY).is_ok());
        assert!(watcher.drain(Duration::from_millis(300)) >= 1);
        assert!(watcher.rx.try_recv().is_err());
    }

    #[test]
    fn test_changes_under_node_modules_are_not_delivered() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("node_modules/pkg");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join("art.config.json"), "{}").unwrap();

        let watcher = ConfigWatcher::new(temp.path()).unwrap();
        fs::write(nested.join("art.config.json"), r#"{"projectType":"spa-vue"}"#).unwrap();
        assert!(
            watcher
                .rx
                .recv_timeout(Duration::from_millis(500))
                .is_err()
        );
    }
}
