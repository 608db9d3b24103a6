pub mod create;
pub mod discover;
pub mod init;
pub mod run;
pub mod tree;
pub mod watch;

pub use create::create_command;
pub use discover::discover_command;
pub use init::init_command;
pub use run::run_command;
pub use tree::tree_command;
pub use watch::watch_command;
