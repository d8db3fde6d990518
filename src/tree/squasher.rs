//! Collapse singleton chains in a built trace tree.
//!
//! A node with exactly one child is merged into that child so long runs of
//! single-call-site frames display as one labeled edge. After squashing,
//! every node has zero or at least two children.

use super::node::TraceNode;

/// Squash a trace tree, bottom-up
///
/// **Public** - runs once on the builder's output
///
/// # Algorithm
/// 1. Squash every child subtree first (children keep their keys and order)
/// 2. If the node had exactly one child, merge: the label chains concatenate
///    and the child's children are adopted
///
/// The merged node keeps its own `queries` and `total`; the child's direct
/// query list is dropped from the merged listing. A collapsed chain therefore
/// undercounts against a union of its levels. This matches the behavior of
/// the report viewer this tool replaces and is kept as-is until confirmed
/// intended (see DESIGN.md).
pub fn squash(mut node: TraceNode) -> TraceNode {
    let children = std::mem::take(&mut node.children);
    let child_count = children.len();

    node.children = children
        .into_iter()
        .map(|(key, child)| (key, squash(child)))
        .collect();

    if child_count != 1 {
        return node;
    }

    let Some((_, child)) = node.children.pop() else {
        return node;
    };

    let mut trace = node.trace;
    trace.extend(child.trace);

    TraceNode {
        trace,
        children: child.children,
        queries: node.queries,
        total: node.total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatter::FormattedQuery;
    use crate::tree::build_tree;

    fn record(sql: &str, stacktrace: &[&str]) -> FormattedQuery {
        FormattedQuery {
            sql: sql.to_string(),
            stacktrace: stacktrace.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn assert_no_singleton(node: &TraceNode) {
        assert_ne!(node.children.len(), 1, "node {:?} has one child", node.trace);
        for child in node.children.values() {
            assert_no_singleton(child);
        }
    }

    #[test]
    fn test_chain_collapses_to_one_node() {
        let root = build_tree(&[record("Q", &["a", "b", "c"])]);
        let squashed = squash(root);

        assert_eq!(
            squashed.trace,
            vec![
                "<root>".to_string(),
                "a".to_string(),
                "b".to_string(),
                "c".to_string(),
            ]
        );
        assert!(squashed.is_leaf());
        assert_eq!(squashed.total, 1);
        assert_eq!(squashed.queries, vec!["Q".to_string()]);
    }

    #[test]
    fn test_branching_node_is_kept() {
        let root = build_tree(&[
            record("Q1", &["a", "b"]),
            record("Q2", &["a", "c"]),
        ]);
        let squashed = squash(root);

        // Root had one child so it merges into the shared frame
        assert_eq!(squashed.trace, vec!["<root>".to_string(), "a".to_string()]);
        assert_eq!(squashed.children.len(), 2);
        assert_eq!(squashed.children["b"].total, 1);
        assert_eq!(squashed.children["c"].total, 1);
        assert_no_singleton(&squashed);
    }

    #[test]
    fn test_leaf_and_empty_root_untouched() {
        let squashed = squash(TraceNode::root());
        assert_eq!(squashed.trace, vec!["<root>".to_string()]);
        assert!(squashed.is_leaf());
    }

    #[test]
    fn test_merge_keeps_parent_queries() {
        // Quirk under test: the merged node keeps the parent's list, so a
        // query seen only below the merge point disappears from the merged
        // node's direct listing.
        let mut root = build_tree(&[record("Q1", &["a"])]);
        {
            let child = root.children.get_mut("a").unwrap();
            child.queries.push("Q-extra".to_string());
            child.total += 1;
        }

        let squashed = squash(root);
        assert_eq!(squashed.queries, vec!["Q1".to_string()]);
        assert_eq!(squashed.total, 1);
    }

    #[test]
    fn test_inner_chain_collapses_below_branch() {
        let root = build_tree(&[
            record("Q1", &["a", "b", "c", "d"]),
            record("Q2", &["a", "x"]),
        ]);
        let squashed = squash(root);

        // a branches; the b->c->d run below it collapses into one edge
        assert_eq!(squashed.trace, vec!["<root>".to_string(), "a".to_string()]);
        let chain = &squashed.children["b"];
        assert_eq!(
            chain.trace,
            vec!["b".to_string(), "c".to_string(), "d".to_string()]
        );
        assert!(chain.is_leaf());
        assert_no_singleton(&squashed);
    }
}
