//! The project explorer: tree data provider over one workspace root.

use crate::command::{CommandDispatcher, ScaffoldKind, ShellCommand};
use crate::config::{ConfigDocument, ConfigStore};
use crate::error::{Error, Result};
use crate::interfaces::{CollapsibleState, ItemCommand, MessageSink, TreeDataProvider, TreeItem};
use crate::notifier::{ChangeNotifier, TreeChanged};
use crate::palette::PaletteCommand;
use crate::project::ProjectDetector;
use crate::tree::{Action, ModuleNode, NodeLevel, TreeModel};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::mpsc::Receiver;
use tracing::{debug, info};

/// Advisory shown when the workspace has no config file.
pub const NOT_MANAGED_ADVISORY: &str = "Not Art Project";

/// Mirrors the config of one workspace root as a module → action tree and
/// runs the actions selected in it.
///
/// The config store, dispatcher and message sink are injected, so several
/// explorers (or an explorer and a palette host) can share one store.
pub struct ProjectExplorer {
    root: PathBuf,
    store: Arc<ConfigStore>,
    notifier: ChangeNotifier,
    dispatcher: CommandDispatcher,
    messages: Arc<dyn MessageSink>,
}

impl ProjectExplorer {
    pub fn new(
        root: impl Into<PathBuf>,
        store: Arc<ConfigStore>,
        dispatcher: CommandDispatcher,
        messages: Arc<dyn MessageSink>,
    ) -> Self {
        Self {
            root: root.into(),
            store,
            notifier: ChangeNotifier::new(),
            dispatcher,
            messages,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn store(&self) -> &Arc<ConfigStore> {
        &self.store
    }

    pub fn is_managed_project(&self) -> bool {
        self.store.is_managed_project(&self.root)
    }

    /// Drop the cached config, then tell subscribers to re-query. The order
    /// matters: a render triggered by the notification must see fresh data.
    pub fn refresh(&self) {
        info!("Refreshing project tree for {}", self.root.display());
        self.store.invalidate(&self.root);
        self.notifier.fire();
    }

    /// React to a modification of `path`. Only config files trigger a
    /// refresh; returns whether one happened.
    pub fn on_config_changed(&self, path: &Path) -> bool {
        if !ProjectDetector::is_config_file(path) {
            return false;
        }
        debug!("Config file changed: {}", path.display());
        self.refresh();
        true
    }

    pub fn document(&self) -> Arc<ConfigDocument> {
        self.store.load_or_empty(&self.root)
    }

    /// Root nodes without the advisory side effect.
    pub fn modules(&self) -> Vec<ModuleNode> {
        if !self.is_managed_project() {
            return Vec::new();
        }
        TreeModel::root_nodes(&self.document())
    }

    pub fn run(&self, node: &ModuleNode) -> Result<ShellCommand> {
        self.dispatcher.dispatch_node(node, &self.root)
    }

    pub fn run_action(&self, action: Action, module: &str) -> Result<ShellCommand> {
        self.run(&ModuleNode::command(action, module))
    }

    pub fn create_project(&self, kind: ScaffoldKind) -> Result<ShellCommand> {
        let command = self
            .dispatcher
            .create_project_command(kind)
            .with_working_dir(&self.root);
        self.dispatcher.dispatch(command)
    }

    /// Scaffold a module; without an explicit kind the config's
    /// `projectType` is used.
    pub fn create_module(&self, name: &str, kind: Option<ScaffoldKind>) -> Result<ShellCommand> {
        let kind = match kind {
            Some(kind) => kind,
            None => self.project_scaffold()?,
        };
        let command = self
            .dispatcher
            .create_module_command(name, kind)?
            .with_working_dir(&self.root);
        self.dispatcher.dispatch(command)
    }

    /// Scaffold kind declared by the config's `projectType`.
    pub fn project_scaffold(&self) -> Result<ScaffoldKind> {
        let document = self.document();
        let project_type = document
            .project_type()
            .ok_or_else(|| Error::UnknownScaffold("<projectType not set>".to_string()))?;
        project_type.parse()
    }
}

impl TreeDataProvider for ProjectExplorer {
    type Node = ModuleNode;

    fn tree_item(&self, node: &ModuleNode) -> TreeItem {
        match node.level {
            NodeLevel::Module => TreeItem {
                label: node.label.clone(),
                collapsible_state: CollapsibleState::Collapsed,
                context_value: "module".to_string(),
                tooltip: Some(node.label.clone()),
                command: None,
            },
            NodeLevel::Command => TreeItem {
                label: node.label.clone(),
                collapsible_state: CollapsibleState::None,
                context_value: "command".to_string(),
                tooltip: None,
                command: node.action.as_ref().map(|payload| ItemCommand {
                    command_id: PaletteCommand::action_id(payload.action).to_string(),
                    title: format!("{} {}", payload.action, payload.module),
                    arguments: vec![payload.module.clone()],
                }),
            },
        }
    }

    fn children(&self, parent: Option<&ModuleNode>) -> Vec<ModuleNode> {
        match parent {
            Some(node) => TreeModel::child_nodes(node),
            None => {
                if !self.is_managed_project() {
                    self.messages.show_information(NOT_MANAGED_ADVISORY);
                    return Vec::new();
                }
                TreeModel::root_nodes(&self.document())
            }
        }
    }

    fn subscribe(&self) -> Receiver<TreeChanged> {
        self.notifier.subscribe()
    }
}
