use super::node::{Action, ModuleNode, NodeLevel};
use crate::config::ConfigDocument;
use std::collections::HashSet;
use tracing::{debug, warn};

/// Derives the module → action tree from a config document.
///
/// Derivation is a pure function of the document, so equal documents always
/// produce equal node sequences and the host keeps its expansion state.
pub struct TreeModel;

impl TreeModel {
    /// One `Module` node per `webpack.entry` key, in file order.
    pub fn root_nodes(document: &ConfigDocument) -> Vec<ModuleNode> {
        let virtual_path = document.project_virtual_path();
        let mut seen = HashSet::new();
        let nodes: Vec<ModuleNode> = document
            .entry_keys()
            .into_iter()
            .map(|key| Self::module_label(key, virtual_path))
            .filter(|label| {
                let fresh = seen.insert(label.clone());
                if !fresh {
                    warn!("Duplicate module label {label:?}; keeping the first entry");
                }
                fresh
            })
            .map(ModuleNode::module)
            .collect();
        debug!("Derived {} module node(s)", nodes.len());
        nodes
    }

    /// `serve` and `build` under a module; nothing under a command.
    pub fn child_nodes(parent: &ModuleNode) -> Vec<ModuleNode> {
        match parent.level {
            NodeLevel::Command => Vec::new(),
            NodeLevel::Module => Action::ALL
                .into_iter()
                .map(|action| ModuleNode::command(action, parent.label.clone()))
                .collect(),
        }
    }

    /// Display label for an entry key: the key with `virtual_path` and one
    /// following `/` removed from its start.
    ///
    /// Falls back to the raw key when there is no virtual path, when the key
    /// does not start with it, or when stripping would leave nothing.
    pub fn module_label(entry_key: &str, virtual_path: Option<&str>) -> String {
        let Some(prefix) = virtual_path.filter(|p| !p.is_empty()) else {
            return entry_key.to_string();
        };

        let prefix = prefix.trim_end_matches('/');
        match entry_key
            .strip_prefix(prefix)
            .and_then(|rest| rest.strip_prefix('/'))
        {
            Some(rest) if !rest.is_empty() => rest.to_string(),
            _ => {
                warn!(
                    "Entry {entry_key:?} is not under projectVirtualPath {prefix:?}; using the raw key"
                );
                entry_key.to_string()
            }
        }
    }
}
