//! Project configuration: the parsed `art.config.*` document and the store
//! that loads, caches and invalidates it.

mod document;
mod format;
pub mod store;

pub use document::ConfigDocument;
pub use format::{CONFIG_FILE_NAMES, ConfigFormat};
pub use store::ConfigStore;
