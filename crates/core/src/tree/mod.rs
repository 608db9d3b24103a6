//! The module → action tree shown by hosts.

pub mod model;
pub mod node;
pub mod outline;

pub use model::TreeModel;
pub use node::{Action, ActionPayload, ModuleNode, NodeId, NodeLevel};
pub use outline::render_outline;
