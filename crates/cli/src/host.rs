//! Terminal implementations of the host traits

use art_explorer_core::{CommandExecutor, MessageSink, Result, ShellCommand};

/// Prints command lines instead of running them.
#[derive(Debug, Default, Clone, Copy)]
pub struct DryRunExecutor;

impl CommandExecutor for DryRunExecutor {
    fn execute(&self, command: &ShellCommand) -> Result<()> {
        println!("{}", command.to_shell_command());
        if let Some(ref dir) = command.working_dir {
            println!("Working directory: {}", dir.display());
        }
        Ok(())
    }
}

/// Shows advisories on stderr so stdout stays machine-readable.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleMessageSink;

impl MessageSink for ConsoleMessageSink {
    fn show_information(&self, message: &str) {
        eprintln!("ℹ️  {message}");
    }
}
