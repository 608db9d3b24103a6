//! Tree data provider interface
//!
//! Mirrors what an editor tree view asks of its data source: a display item
//! per node, the children of a node (or the roots), and a stream telling it
//! to re-query.

use crate::notifier::TreeChanged;
use serde::Serialize;
use std::sync::mpsc::Receiver;

/// Whether and how a displayed node can be expanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CollapsibleState {
    None,
    Collapsed,
    Expanded,
}

/// Command the host runs when a displayed node is activated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemCommand {
    pub command_id: String,
    pub title: String,
    pub arguments: Vec<String>,
}

/// Host-renderable form of a node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeItem {
    pub label: String,
    pub collapsible_state: CollapsibleState,
    /// Used by hosts to pick per-kind menus and icons.
    pub context_value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<ItemCommand>,
}

pub trait TreeDataProvider {
    type Node;

    /// Display form of `node`.
    fn tree_item(&self, node: &Self::Node) -> TreeItem;

    /// Children of `parent`, or the roots when `parent` is `None`.
    ///
    /// Never fails: errors are turned into an empty sequence so a broken
    /// data source cannot take the host's render loop down.
    fn children(&self, parent: Option<&Self::Node>) -> Vec<Self::Node>;

    /// Receives a [`TreeChanged`] whenever the whole tree should be
    /// re-queried.
    fn subscribe(&self) -> Receiver<TreeChanged>;
}
