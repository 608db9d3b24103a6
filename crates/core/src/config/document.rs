use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const ENTRY_KEY: &str = "webpack.entry";
pub const VIRTUAL_PATH_KEY: &str = "projectVirtualPath";
pub const PROJECT_TYPE_KEY: &str = "projectType";

/// A parsed project configuration.
///
/// The document is never mutated after parsing. A reload produces a new
/// document that replaces the old one wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigDocument {
    root: Value,
}

impl Default for ConfigDocument {
    fn default() -> Self {
        Self::empty()
    }
}

impl ConfigDocument {
    pub fn empty() -> Self {
        Self {
            root: Value::Object(Map::new()),
        }
    }

    pub fn from_value(root: Value) -> Self {
        Self { root }
    }

    pub fn as_value(&self) -> &Value {
        &self.root
    }

    /// Resolve a dot-separated key such as `webpack.entry`.
    ///
    /// Returns `None` as soon as a segment is missing or the walk reaches a
    /// value that is not an object.
    pub fn get(&self, dotted_key: &str) -> Option<&Value> {
        if dotted_key.is_empty() {
            return Some(&self.root);
        }
        dotted_key
            .split('.')
            .try_fold(&self.root, |value, segment| value.as_object()?.get(segment))
    }

    /// Keys of `webpack.entry` in file order. Missing or non-object entry
    /// maps yield no keys.
    pub fn entry_keys(&self) -> Vec<&str> {
        self.get(ENTRY_KEY)
            .and_then(Value::as_object)
            .map(|entries| entries.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    pub fn project_virtual_path(&self) -> Option<&str> {
        self.get(VIRTUAL_PATH_KEY).and_then(Value::as_str)
    }

    pub fn project_type(&self) -> Option<&str> {
        self.get(PROJECT_TYPE_KEY).and_then(Value::as_str)
    }

    pub fn is_empty(&self) -> bool {
        match &self.root {
            Value::Object(map) => map.is_empty(),
            Value::Null => true,
            _ => false,
        }
    }
}
