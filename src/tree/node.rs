//! Trace tree node type.

use crate::utils::config::ROOT_LABEL;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One node of a trace tree
///
/// **Public** - produced by the builder, rewritten by the squasher,
/// consumed by the output layer
///
/// Before squashing `trace` holds exactly one label: the formatted call-site
/// key this node represents (the root uses `"<root>"`). After squashing a
/// node may carry a chain of labels, one per collapsed singleton level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceNode {
    /// Label chain for this node, top of the collapsed chain first
    pub trace: Vec<String>,

    /// Children keyed by formatted call-site, in insertion order
    pub children: IndexMap<String, TraceNode>,

    /// Formatted SQL of every query that passed through this node
    pub queries: Vec<String>,

    /// Count of stacktrace paths traversing this node
    pub total: u64,
}

impl TraceNode {
    /// Create an empty node with a single label
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            trace: vec![label.into()],
            children: IndexMap::new(),
            queries: Vec::new(),
            total: 0,
        }
    }

    /// Create an empty root node
    pub fn root() -> Self {
        Self::new(ROOT_LABEL)
    }

    /// True if this node has no children
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_node() {
        let root = TraceNode::root();
        assert_eq!(root.trace, vec!["<root>".to_string()]);
        assert_eq!(root.total, 0);
        assert!(root.is_leaf());
    }

    #[test]
    fn test_serialized_shape() {
        let node = TraceNode::new("app/views.py:42>list_plans");
        let value = serde_json::to_value(&node).unwrap();
        assert_eq!(value["trace"][0], "app/views.py:42>list_plans");
        assert_eq!(value["total"], 0);
        assert!(value["children"].as_object().unwrap().is_empty());
    }
}
