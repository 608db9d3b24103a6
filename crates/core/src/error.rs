use std::io;
use std::path::PathBuf;

/// Errors that can occur during art-explorer operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Failed to load config {path}: {reason}")]
    ConfigLoad { path: PathBuf, reason: String },

    #[error("Not an art project: no config file under {0}")]
    NotManaged(PathBuf),

    #[error("Module label {0:?} contains shell metacharacters")]
    UnsafeLabel(String),

    #[error("Unknown scaffold type: {0}")]
    UnknownScaffold(String),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Command {command} is missing its {argument} argument")]
    MissingArgument {
        command: String,
        argument: &'static str,
    },

    #[error("Command `{command}` failed with exit code {code:?}")]
    CommandFailed { command: String, code: Option<i32> },

    #[error("Node {0:?} has no action attached")]
    NotACommand(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn config_load(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Error::ConfigLoad {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

/// Result type alias for art-explorer operations
pub type Result<T> = std::result::Result<T, Error>;
