//! Build a raw trace tree from a formatted query batch.
//!
//! The tree is a prefix tree over formatted call-site keys: each node is one
//! distinct frame key at one depth. Every node a query's stacktrace passes
//! through records that query, so any node can report "all queries issued by
//! this call site or anything it calls".

use super::node::TraceNode;
use crate::formatter::FormattedQuery;
use log::debug;

/// Build the raw (unsquashed) trace tree for one query batch
///
/// **Public** - main entry point for tree construction
///
/// # Arguments
/// * `records` - formatted query records, one insertion per record
///
/// # Returns
/// The root of the tree; `root.total` equals the number of records.
///
/// # Algorithm
/// 1. Start from an empty root
/// 2. For each record, descend by frame key, creating missing children
/// 3. Append the record's SQL and bump `total` at every visited node,
///    root and intermediates included
pub fn build_tree(records: &[FormattedQuery]) -> TraceNode {
    debug!("Building trace tree from {} query records", records.len());

    let mut root = TraceNode::root();
    for record in records {
        insert(&mut root, record, 0);
    }

    debug!(
        "Built trace tree: {} top-level call sites, {} queries at root",
        root.children.len(),
        root.total
    );

    root
}

/// Insert one record below `node`, starting at stack depth `depth`
///
/// A record with an empty stacktrace still reaches the root: the query and
/// count land here before the depth check.
fn insert(node: &mut TraceNode, record: &FormattedQuery, depth: usize) {
    node.queries.push(record.sql.clone());
    node.total += 1;

    let Some(key) = record.stacktrace.get(depth) else {
        return;
    };

    let child = node
        .children
        .entry(key.clone())
        .or_insert_with(|| TraceNode::new(key.clone()));
    insert(child, record, depth + 1);
}
