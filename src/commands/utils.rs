use crate::output::read_tree;
use crate::utils::config::SCHEMA_VERSION;
use anyhow::Result;
use std::path::PathBuf;

/// Validate a tree profile JSON file
pub fn validate_tree_file(file_path: PathBuf) -> Result<()> {
    println!("Validating tree profile: {}", file_path.display());

    let profile = read_tree(&file_path)?;

    println!("✓ Valid tree profile JSON");
    println!("  Version: {}", profile.version);
    println!("  Test Case: {}", profile.test_case);
    println!("  API Call: {}", profile.api_call);
    println!("  Queries: {}", profile.query_count);
    println!("  Top-level Branches: {}", profile.tree.children.len());

    Ok(())
}

/// Display schema information
pub fn display_schema(show_details: bool) {
    println!("Query Trace Studio Tree Profile Schema");
    println!("Current Version: {}", SCHEMA_VERSION);
    println!();

    if show_details {
        println!("Schema Structure:");
        println!("  version: string      - Schema version (e.g., '1.0.0')");
        println!("  test_case: string    - Source test case identifier");
        println!("  api_call: string     - Source API call (method and path)");
        println!("  query_count: number  - Queries in the aggregated batch");
        println!("  tree: object         - Squashed trace tree");
        println!("    trace: array       - Label chain (collapsed call sites)");
        println!("    children: object   - Child nodes keyed by call site");
        println!("    queries: array     - SQL accumulated at this node");
        println!("    total: number      - Queries passing through this node");
        println!("  generated_at: string - ISO 8601 timestamp");
    } else {
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
pub fn display_version() {
    println!("Query Trace Studio v{}", env!("CARGO_PKG_VERSION"));
    println!("Tree Profile Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Call-site trace tree aggregation for database query count reports.");
}
