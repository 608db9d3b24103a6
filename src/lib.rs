//! Umbrella package for workspace-level integration tests (see `tests/`).

pub use art_explorer_core::*;
