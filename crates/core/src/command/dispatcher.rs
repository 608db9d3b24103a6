use super::{ScaffoldKind, ShellCommand};
use crate::error::{Error, Result};
use crate::interfaces::CommandExecutor;
use crate::tree::{Action, ModuleNode};
use regex::Regex;
use std::path::Path;
use std::sync::{Arc, LazyLock};
use tracing::info;

/// Characters that keep their meaning inside double quotes, or end the
/// command outright.
static UNSAFE_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"["`$\\!;&|<>\p{Cc}]"#).expect("valid label pattern"));

/// Turns tree selections and palette actions into tool command lines and
/// hands them to the host executor.
pub struct CommandDispatcher {
    tool_name: String,
    executor: Arc<dyn CommandExecutor>,
}

impl CommandDispatcher {
    pub fn new(tool_name: impl Into<String>, executor: Arc<dyn CommandExecutor>) -> Self {
        Self {
            tool_name: tool_name.into(),
            executor,
        }
    }

    /// `<tool> <action> -m="<module>"`
    pub fn action_command(&self, action: Action, module: &str) -> Result<ShellCommand> {
        validate_label(module)?;
        Ok(ShellCommand::new(
            &self.tool_name,
            vec![action.as_str().to_string(), format!("-m=\"{module}\"")],
        ))
    }

    pub fn node_command(&self, node: &ModuleNode) -> Result<ShellCommand> {
        let payload = node
            .action
            .as_ref()
            .ok_or_else(|| Error::NotACommand(node.label.clone()))?;
        self.action_command(payload.action, &payload.module)
    }

    /// `<tool> create project -t=<code>`
    pub fn create_project_command(&self, kind: ScaffoldKind) -> ShellCommand {
        ShellCommand::new(
            &self.tool_name,
            vec![
                "create".to_string(),
                "project".to_string(),
                format!("-t={}", kind.type_code()),
            ],
        )
    }

    /// `<tool> create module -m="<name>" -t=<code>`
    pub fn create_module_command(&self, name: &str, kind: ScaffoldKind) -> Result<ShellCommand> {
        validate_label(name)?;
        Ok(ShellCommand::new(
            &self.tool_name,
            vec![
                "create".to_string(),
                "module".to_string(),
                format!("-m=\"{name}\""),
                format!("-t={}", kind.type_code()),
            ],
        ))
    }

    /// Run the command for a `Command` node from `working_dir`. Returns the
    /// command that was handed to the executor.
    pub fn dispatch_node(&self, node: &ModuleNode, working_dir: &Path) -> Result<ShellCommand> {
        let command = self.node_command(node)?.with_working_dir(working_dir);
        self.dispatch(command)
    }

    pub fn dispatch(&self, command: ShellCommand) -> Result<ShellCommand> {
        info!("Dispatching: {}", command.to_shell_command());
        self.executor.execute(&command)?;
        Ok(command)
    }
}

/// Rejects labels that could break out of the double-quoted `-m=` argument.
pub fn validate_label(label: &str) -> Result<()> {
    if label.trim().is_empty() || UNSAFE_LABEL.is_match(label) {
        return Err(Error::UnsafeLabel(label.to_string()));
    }
    Ok(())
}
