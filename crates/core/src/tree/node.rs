use crate::error::{Error, Result};
use crate::impl_case_insensitive_deserialize;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Position of a node in the fixed two-tier tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeLevel {
    Module,
    Command,
}

impl_case_insensitive_deserialize!(
    NodeLevel,
    Module => "module",
    Command => "command"
);

impl NodeLevel {
    pub fn is_expandable(self) -> bool {
        matches!(self, NodeLevel::Module)
    }
}

/// Action a leaf node runs against its module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Serve,
    Build,
}

impl_case_insensitive_deserialize!(
    Action,
    Serve => "serve",
    Build => "build"
);

impl Action {
    /// Children of every module node, in display order.
    pub const ALL: [Action; 2] = [Action::Serve, Action::Build];

    pub fn as_str(self) -> &'static str {
        match self {
            Action::Serve => "serve",
            Action::Build => "build",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "serve" => Ok(Action::Serve),
            "build" => Ok(Action::Build),
            other => Err(Error::UnknownCommand(other.to_string())),
        }
    }
}

/// Payload carried by `Command` nodes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ActionPayload {
    pub action: Action,
    /// Label of the owning module node.
    pub module: String,
}

/// Identity the host uses to match nodes across re-renders.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    pub label: String,
    pub level: NodeLevel,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleNode {
    pub label: String,
    pub level: NodeLevel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<ActionPayload>,
}

impl ModuleNode {
    pub fn module(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            level: NodeLevel::Module,
            action: None,
        }
    }

    pub fn command(action: Action, module: impl Into<String>) -> Self {
        Self {
            label: action.as_str().to_string(),
            level: NodeLevel::Command,
            action: Some(ActionPayload {
                action,
                module: module.into(),
            }),
        }
    }

    pub fn id(&self) -> NodeId {
        NodeId {
            label: self.label.clone(),
            level: self.level,
        }
    }

    pub fn is_expandable(&self) -> bool {
        self.level.is_expandable()
    }
}
