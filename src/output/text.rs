//! Terminal rendering of a squashed trace tree.

use crate::tree::TraceNode;
use crate::utils::config::TRACE_CHAIN_SEPARATOR;

/// Longest label chain printed before truncation kicks in
const MAX_LABEL_WIDTH: usize = 100;

/// Render a squashed trace tree as an indented listing
///
/// **Public** - used for the `--summary` flag
///
/// # Arguments
/// * `tree` - the squashed tree root
/// * `max_depth` - deepest level to print; deeper subtrees are elided
pub fn render_text(tree: &TraceNode, max_depth: usize) -> String {
    let mut lines = Vec::new();
    render_node(tree, 0, max_depth, &mut lines);
    lines.join("\n")
}

fn render_node(node: &TraceNode, depth: usize, max_depth: usize, lines: &mut Vec<String>) {
    let indent = "  ".repeat(depth);
    let glyph = if depth == 0 { "" } else { "└─ " };

    let label = node.trace.join(TRACE_CHAIN_SEPARATOR);
    let label = truncate_label(&label);

    lines.push(format!(
        "{}{}{} ({} {})",
        indent,
        glyph,
        label,
        node.total,
        if node.total == 1 { "query" } else { "queries" }
    ));

    if depth >= max_depth {
        if !node.children.is_empty() {
            lines.push(format!("{}   ... {} subtrees elided", indent, node.children.len()));
        }
        return;
    }

    for child in node.children.values() {
        render_node(child, depth + 1, max_depth, lines);
    }
}

/// Truncate a long label chain, keeping its tail
fn truncate_label(label: &str) -> String {
    if label.len() > MAX_LABEL_WIDTH {
        let tail_start = label.len() - (MAX_LABEL_WIDTH - 3);
        format!("...{}", &label[tail_start..])
    } else {
        label.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatter::FormattedQuery;
    use crate::tree::{build_tree, squash};

    fn record(sql: &str, stacktrace: &[&str]) -> FormattedQuery {
        FormattedQuery {
            sql: sql.to_string(),
            stacktrace: stacktrace.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_render_single_chain() {
        let tree = squash(build_tree(&[record("Q", &["a.py:1>f"])]));
        let text = render_text(&tree, 10);
        assert_eq!(text, "<root> > a.py:1>f (1 query)");
    }

    #[test]
    fn test_render_branching_tree() {
        let tree = squash(build_tree(&[
            record("Q1", &["a", "b"]),
            record("Q2", &["a", "c"]),
        ]));
        let text = render_text(&tree, 10);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "<root> > a (2 queries)");
        assert_eq!(lines[1], "  └─ b (1 query)");
        assert_eq!(lines[2], "  └─ c (1 query)");
    }

    #[test]
    fn test_render_respects_max_depth() {
        let tree = build_tree(&[
            record("Q1", &["a", "b"]),
            record("Q2", &["a", "c"]),
            record("Q3", &["x"]),
        ]);
        let text = render_text(&tree, 1);
        assert!(text.contains("subtrees elided"));
        assert!(!text.contains("└─ b"));
    }

    #[test]
    fn test_truncate_label() {
        let long = "x".repeat(150);
        let truncated = truncate_label(&long);
        assert_eq!(truncated.len(), MAX_LABEL_WIDTH);
        assert!(truncated.starts_with("..."));
    }
}
