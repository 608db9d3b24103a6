use crate::command::ShellCommand;
use crate::error::{Error, Result};
use crate::interfaces::CommandExecutor;
use std::process::Command;
use std::thread;
use tracing::debug;

/// Runs command lines through a shell (`<shell> -c <line>`).
#[derive(Debug, Clone)]
pub struct ProcessExecutor {
    shell: String,
    wait: bool,
}

impl ProcessExecutor {
    /// Spawn and return immediately. A background thread reaps the child.
    pub fn detached(shell: impl Into<String>) -> Self {
        Self {
            shell: shell.into(),
            wait: false,
        }
    }

    /// Block until the process exits and report a non-zero status.
    pub fn attached(shell: impl Into<String>) -> Self {
        Self {
            shell: shell.into(),
            wait: true,
        }
    }

    fn build(&self, command: &ShellCommand) -> Command {
        let mut process = Command::new(&self.shell);
        process.arg("-c").arg(command.to_shell_command());
        if let Some(ref dir) = command.working_dir {
            process.current_dir(dir);
        }
        process
    }
}

impl CommandExecutor for ProcessExecutor {
    fn execute(&self, command: &ShellCommand) -> Result<()> {
        let mut process = self.build(command);

        if !self.wait {
            let mut child = process.spawn()?;
            let pid = child.id();
            debug!("Spawned `{}` as pid {}", command, pid);
            thread::Builder::new()
                .name(format!("reap-{pid}"))
                .spawn(move || match child.wait() {
                    Ok(status) => debug!("Detached pid {pid} exited with {status}"),
                    Err(e) => debug!("Failed to wait on detached pid {pid}: {e}"),
                })?;
            return Ok(());
        }

        let status = process.status()?;
        if status.success() {
            Ok(())
        } else {
            Err(Error::CommandFailed {
                command: command.to_shell_command(),
                code: status.code(),
            })
        }
    }
}
