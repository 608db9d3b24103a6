//! Actions a host exposes in its command palette.

use crate::command::{ScaffoldKind, ShellCommand};
use crate::error::{Error, Result};
use crate::explorer::ProjectExplorer;
use crate::tree::Action;

pub const REFRESH: &str = "artProjectExplorer:refresh";
pub const SERVE: &str = "artProjectExplorer:serve";
pub const BUILD: &str = "artProjectExplorer:build";
pub const CREATE_PROJECT: &str = "artProjectExplorer:createProject";
pub const CREATE_MODULE: &str = "artProjectExplorer:createModule";

/// Every command id, in the order a host registers them.
pub const ALL_COMMAND_IDS: [&str; 5] = [REFRESH, SERVE, BUILD, CREATE_PROJECT, CREATE_MODULE];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteCommand {
    Refresh,
    Run {
        action: Action,
        module: String,
    },
    CreateProject {
        kind: ScaffoldKind,
    },
    /// `kind` falls back to the config's `projectType` when absent.
    CreateModule {
        name: String,
        kind: Option<ScaffoldKind>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteOutcome {
    Refreshed,
    Dispatched(ShellCommand),
}

impl PaletteCommand {
    pub fn action_id(action: Action) -> &'static str {
        match action {
            Action::Serve => SERVE,
            Action::Build => BUILD,
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            PaletteCommand::Refresh => REFRESH,
            PaletteCommand::Run { action, .. } => Self::action_id(*action),
            PaletteCommand::CreateProject { .. } => CREATE_PROJECT,
            PaletteCommand::CreateModule { .. } => CREATE_MODULE,
        }
    }

    /// Rebuild a command from the id and string arguments a host passes
    /// back on invocation.
    pub fn parse(id: &str, args: &[String]) -> Result<Self> {
        let arg = |index: usize, argument: &'static str| {
            args.get(index)
                .filter(|value| !value.trim().is_empty())
                .cloned()
                .ok_or_else(|| Error::MissingArgument {
                    command: id.to_string(),
                    argument,
                })
        };

        match id {
            REFRESH => Ok(PaletteCommand::Refresh),
            SERVE => Ok(PaletteCommand::Run {
                action: Action::Serve,
                module: arg(0, "module")?,
            }),
            BUILD => Ok(PaletteCommand::Run {
                action: Action::Build,
                module: arg(0, "module")?,
            }),
            CREATE_PROJECT => Ok(PaletteCommand::CreateProject {
                kind: arg(0, "scaffold type")?.parse()?,
            }),
            CREATE_MODULE => Ok(PaletteCommand::CreateModule {
                name: arg(0, "module name")?,
                kind: args.get(1).map(|kind| kind.parse()).transpose()?,
            }),
            other => Err(Error::UnknownCommand(other.to_string())),
        }
    }

    pub fn execute(self, explorer: &ProjectExplorer) -> Result<PaletteOutcome> {
        match self {
            PaletteCommand::Refresh => {
                explorer.refresh();
                Ok(PaletteOutcome::Refreshed)
            }
            PaletteCommand::Run { action, module } => explorer
                .run_action(action, &module)
                .map(PaletteOutcome::Dispatched),
            PaletteCommand::CreateProject { kind } => explorer
                .create_project(kind)
                .map(PaletteOutcome::Dispatched),
            PaletteCommand::CreateModule { name, kind } => explorer
                .create_module(&name, kind)
                .map(PaletteOutcome::Dispatched),
        }
    }
}
