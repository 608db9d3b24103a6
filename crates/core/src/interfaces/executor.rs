use crate::command::ShellCommand;
use crate::error::Result;

/// Host facility that runs a command line in a terminal-like context.
///
/// Execution is fire-and-forget from the core's point of view: `Ok` means the
/// command was handed over, not that it succeeded.
pub trait CommandExecutor: Send + Sync {
    fn execute(&self, command: &ShellCommand) -> Result<()>;
}
