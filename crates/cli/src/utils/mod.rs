pub mod root;

pub use root::{build_explorer, resolve_root};
