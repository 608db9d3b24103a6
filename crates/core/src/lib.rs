//! art-explorer - mirror an art project's build config as a runnable tree
//!
//! This crate provides functionality to:
//! - Detect art projects and load their `art.config.json`/`art.config.toml`
//! - Cache the parsed config and invalidate it when the file changes
//! - Derive a module → action tree for editor-style tree views
//! - Build and dispatch `art serve`/`art build`/`art create` command lines
pub mod command;
pub mod config;
pub mod error;
pub mod explorer;
pub mod interfaces;
pub mod notifier;
pub mod palette;
pub mod project;
pub mod services;
pub mod settings;
pub mod tree;
pub mod utils;

// Re-export commonly used types and traits
pub use error::{Error, Result};
pub use tree::{Action, ModuleNode, NodeId, NodeLevel, TreeModel};

// Re-export main API components
pub use command::{CommandDispatcher, ScaffoldKind, ShellCommand};
pub use config::{ConfigDocument, ConfigStore};
pub use explorer::ProjectExplorer;
pub use interfaces::{CommandExecutor, MessageSink, TreeDataProvider, TreeItem};
pub use notifier::{ChangeNotifier, TreeChanged};
pub use palette::{PaletteCommand, PaletteOutcome};
pub use project::ProjectDetector;
pub use settings::Settings;
