//! Seams between the explorer core and its host.
//!
//! The host owns the tree widget, process execution and user-facing
//! messages. The core only talks to them through these traits, so an editor
//! integration and the bundled CLI plug in the same way.

pub mod executor;
pub mod message;
pub mod tree_provider;

pub use executor::CommandExecutor;
pub use message::MessageSink;
pub use tree_provider::{CollapsibleState, ItemCommand, TreeDataProvider, TreeItem};
