//! Default host-side implementations of the interface traits

pub mod process_executor;

pub use process_executor::ProcessExecutor;
