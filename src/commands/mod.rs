//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod tree;
pub mod utils;

// Re-export main command functions
pub use tree::{execute_tree, validate_args, TreeArgs};
pub use utils::{display_schema, display_version, validate_tree_file};
