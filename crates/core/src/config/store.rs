use super::{ConfigDocument, ConfigFormat};
use crate::error::{Error, Result};
use crate::project::ProjectDetector;
use crate::settings::Settings;
use lru::LruCache;
use serde_json::Value;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::SystemTime;
use tracing::{debug, warn};

/// Loads and caches one `ConfigDocument` per workspace root.
///
/// A cached document is served while the config file's modification time and
/// length are unchanged. Editors can rewrite a file within the timestamp
/// granularity, so anything reacting to a change notification must call
/// [`ConfigStore::invalidate`] before the next [`ConfigStore::load`].
#[derive(Debug)]
pub struct ConfigStore {
    entries: Mutex<LruCache<PathBuf, CacheEntry>>,
}

#[derive(Debug, Clone)]
struct CacheEntry {
    config_path: PathBuf,
    modified: Option<SystemTime>,
    len: u64,
    file_hash: String,
    document: Arc<ConfigDocument>,
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new(Settings::default().cache_capacity)
    }
}

impl ConfigStore {
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: Mutex::new(LruCache::new(capacity)),
        }
    }

    pub fn with_settings(settings: &Settings) -> Self {
        Self::new(settings.cache_capacity)
    }

    pub fn is_managed_project(&self, root: &Path) -> bool {
        ProjectDetector::is_managed_project(root)
    }

    /// Load the config for `root`, reusing the cached parse when the file is
    /// unchanged.
    pub fn load(&self, root: &Path) -> Result<Arc<ConfigDocument>> {
        let config_path = ProjectDetector::config_path(root)
            .ok_or_else(|| Error::NotManaged(root.to_path_buf()))?;
        let metadata =
            std::fs::metadata(&config_path).map_err(|e| Error::config_load(&config_path, e))?;
        let modified = metadata.modified().ok();
        let len = metadata.len();

        if let Some(entry) = self.lock().get(root) {
            if entry.config_path == config_path && entry.modified == modified && entry.len == len {
                debug!("Config cache hit for {}", root.display());
                return Ok(Arc::clone(&entry.document));
            }
        }

        let bytes = std::fs::read(&config_path).map_err(|e| Error::config_load(&config_path, e))?;
        let file_hash = format!("{:x}", md5::compute(&bytes));

        let mut entries = self.lock();
        if let Some(entry) = entries.get_mut(root) {
            if entry.config_path == config_path && entry.file_hash == file_hash {
                debug!("Config touched but unchanged: {}", config_path.display());
                entry.modified = modified;
                entry.len = len;
                return Ok(Arc::clone(&entry.document));
            }
        }

        let document = Arc::new(Self::parse(&config_path, &bytes)?);
        debug!(
            "Parsed config {} ({} entries)",
            config_path.display(),
            document.entry_keys().len()
        );
        entries.put(
            root.to_path_buf(),
            CacheEntry {
                config_path,
                modified,
                len,
                file_hash,
                document: Arc::clone(&document),
            },
        );
        Ok(document)
    }

    /// Like [`ConfigStore::load`], but any failure becomes an empty document.
    pub fn load_or_empty(&self, root: &Path) -> Arc<ConfigDocument> {
        match self.load(root) {
            Ok(document) => document,
            Err(Error::NotManaged(_)) => {
                debug!("No config under {}", root.display());
                Arc::new(ConfigDocument::empty())
            }
            Err(e) => {
                warn!("Treating config as empty: {e}");
                Arc::new(ConfigDocument::empty())
            }
        }
    }

    /// Drop the cached parse for `root`; the next `load` reads from disk.
    pub fn invalidate(&self, root: &Path) {
        if self.lock().pop(root).is_some() {
            debug!("Invalidated cached config for {}", root.display());
        }
    }

    /// Dot-path lookup into a loaded document.
    pub fn get<'a>(document: &'a ConfigDocument, dotted_key: &str) -> Option<&'a Value> {
        document.get(dotted_key)
    }

    pub fn is_cached(&self, root: &Path) -> bool {
        self.lock().contains(root)
    }

    fn parse(config_path: &Path, bytes: &[u8]) -> Result<ConfigDocument> {
        let format = ConfigFormat::from_path(config_path)
            .ok_or_else(|| Error::config_load(config_path, "unsupported config file extension"))?;
        let contents =
            std::str::from_utf8(bytes).map_err(|e| Error::config_load(config_path, e))?;
        let value = format
            .parse(contents)
            .map_err(|reason| Error::config_load(config_path, reason))?;
        if !value.is_object() {
            return Err(Error::config_load(
                config_path,
                "top-level value must be an object",
            ));
        }
        Ok(ConfigDocument::from_value(value))
    }

    fn lock(&self) -> MutexGuard<'_, LruCache<PathBuf, CacheEntry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    fn write_config(root: &Path, value: serde_json::Value) {
        fs::write(
            root.join("art.config.json"),
            serde_json::to_string_pretty(&value).unwrap(),
        )
        .unwrap();
    }

    #[test]
    fn test_load_returns_document() -> Result<()> {
        let temp = TempDir::new()?;
        write_config(
            temp.path(),
            json!({ "projectVirtualPath": "/src/modules", "webpack": { "entry": { "/src/modules/a/index.js": "a" } } }),
        );

        let store = ConfigStore::default();
        let document = store.load(temp.path())?;
        assert_eq!(document.project_virtual_path(), Some("/src/modules"));
        assert_eq!(
            ConfigStore::get(&document, "webpack.entry"),
            Some(&json!({ "/src/modules/a/index.js": "a" }))
        );
        assert!(store.is_cached(temp.path()));
        Ok(())
    }

    #[test]
    fn test_unchanged_file_is_served_from_cache() -> Result<()> {
        let temp = TempDir::new()?;
        write_config(temp.path(), json!({ "projectType": "spa-vue" }));

        let store = ConfigStore::default();
        let first = store.load(temp.path())?;
        let second = store.load(temp.path())?;
        assert!(Arc::ptr_eq(&first, &second));
        Ok(())
    }

    #[test]
    fn test_invalidate_forces_reread() -> Result<()> {
        let temp = TempDir::new()?;
        let path = temp.path().join("art.config.json");
        fs::write(&path, r#"{"projectType":"spa-vue"}"#)?;

        let store = ConfigStore::default();
        let stale = store.load(temp.path())?;

        // same length, and possibly the same mtime
        fs::write(&path, r#"{"projectType":"ssr-vue"}"#)?;
        store.invalidate(temp.path());
        assert!(!store.is_cached(temp.path()));

        let fresh = store.load(temp.path())?;
        assert_eq!(stale.project_type(), Some("spa-vue"));
        assert_eq!(fresh.project_type(), Some("ssr-vue"));
        Ok(())
    }

    #[test]
    fn test_missing_config_is_not_managed() {
        let temp = TempDir::new().unwrap();
        let store = ConfigStore::default();
        assert!(!store.is_managed_project(temp.path()));
        assert!(matches!(store.load(temp.path()), Err(Error::NotManaged(_))));
        assert!(store.load_or_empty(temp.path()).is_empty());
    }

    #[test]
    fn test_malformed_config_degrades_to_empty() -> Result<()> {
        let temp = TempDir::new()?;
        fs::write(
            temp.path().join("art.config.json"),
            "module.exports = { webpack: {} }",
        )?;

        let store = ConfigStore::default();
        assert!(matches!(
            store.load(temp.path()),
            Err(Error::ConfigLoad { .. })
        ));
        assert!(store.load_or_empty(temp.path()).entry_keys().is_empty());
        Ok(())
    }

    #[test]
    fn test_non_object_config_is_rejected() -> Result<()> {
        let temp = TempDir::new()?;
        fs::write(temp.path().join("art.config.json"), "[1, 2, 3]")?;
        let store = ConfigStore::default();
        assert!(matches!(
            store.load(temp.path()),
            Err(Error::ConfigLoad { .. })
        ));
        Ok(())
    }

    #[test]
    fn test_toml_config_is_loaded() -> Result<()> {
        let temp = TempDir::new()?;
        fs::write(
            temp.path().join("art.config.toml"),
            "projectType = \"miniprogram\"\n",
        )?;
        let store = ConfigStore::default();
        assert_eq!(store.load(temp.path())?.project_type(), Some("miniprogram"));
        Ok(())
    }

    #[test]
    fn test_capacity_evicts_least_recent_root() -> Result<()> {
        let a = TempDir::new()?;
        let b = TempDir::new()?;
        write_config(a.path(), json!({}));
        write_config(b.path(), json!({}));

        let store = ConfigStore::new(1);
        store.load(a.path())?;
        store.load(b.path())?;
        assert!(!store.is_cached(a.path()));
        assert!(store.is_cached(b.path()));
        Ok(())
    }
}
