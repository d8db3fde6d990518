//! Trace tree construction and compaction.
//!
//! This module transforms a formatted query batch into:
//! - A raw prefix tree over call-site keys, with per-node query accumulation
//! - A squashed tree where singleton chains are collapsed into labeled edges

pub mod builder;
pub mod node;
pub mod squasher;

// Re-export main types and functions
pub use builder::build_tree;
pub use node::TraceNode;
pub use squasher::squash;
