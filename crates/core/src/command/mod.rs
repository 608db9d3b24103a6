//! Tool command generation and dispatch

pub mod dispatcher;
pub mod scaffold;
pub mod shell_command;

// Re-export commonly used types
pub use dispatcher::{CommandDispatcher, validate_label};
pub use scaffold::ScaffoldKind;
pub use shell_command::ShellCommand;
