//! Output writers for squashed trace trees.
//!
//! This module handles presenting the tree after the pipeline has run:
//! - JSON tree profiles (versioned, timestamped)
//! - Indented text summaries for the terminal

pub mod json;
pub mod text;

// Re-export main functions
pub use json::{read_tree, to_tree_profile, write_tree, TreeProfile};
pub use text::render_text;
