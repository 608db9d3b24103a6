use serde_json::Value;
use std::path::Path;

/// Conventional config file names, in lookup order.
pub const CONFIG_FILE_NAMES: [&str; 2] = ["art.config.json", "art.config.toml"];

/// On-disk syntax of a project config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "json" => Some(ConfigFormat::Json),
            "toml" => Some(ConfigFormat::Toml),
            _ => None,
        }
    }

    pub fn parse(self, contents: &str) -> Result<Value, String> {
        match self {
            ConfigFormat::Json => serde_json::from_str(contents).map_err(|e| e.to_string()),
            ConfigFormat::Toml => toml::from_str(contents).map_err(|e| e.to_string()),
        }
    }
}
