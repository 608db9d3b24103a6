pub mod command_breakdown;
pub mod formatter;

pub use command_breakdown::{command_breakdown, print_command_breakdown};
pub use formatter::{NodeView, format_tree, tree_view};
