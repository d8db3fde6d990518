//! Tree command implementation.
//!
//! The tree command:
//! 1. Loads a query count report from disk
//! 2. Selects one query batch (test case + API call)
//! 3. Formats stacktraces and SQL
//! 4. Builds and squashes the trace tree
//! 5. Writes the tree profile JSON
//! 6. Optionally prints a text summary

use crate::formatter::TraceFormatter;
use crate::output::{render_text, to_tree_profile, write_tree};
use crate::parser::read_report;
use crate::tree::{build_tree, squash};
use crate::utils::config::{DEFAULT_API_CALL, DEFAULT_TEST_CASE};
use anyhow::{bail, Context, Result};
use log::{debug, info};
use std::path::PathBuf;

/// Arguments for the tree command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct TreeArgs {
    /// Path to the query count report JSON
    pub input: PathBuf,

    /// Output path for the tree profile JSON
    pub output: PathBuf,

    /// Index of the test case to aggregate
    pub test_case: usize,

    /// Index of the API call within the test case
    pub api_call: usize,

    /// Ordered path replacement rules (pattern, replacement)
    pub replacements: Vec<(String, String)>,

    /// Print text summary to stdout
    pub print_summary: bool,

    /// Deepest tree level shown in the text summary
    pub summary_depth: usize,
}

impl Default for TreeArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::new(),
            output: PathBuf::from("trace-tree.json"),
            test_case: DEFAULT_TEST_CASE,
            api_call: DEFAULT_API_CALL,
            replacements: Vec::new(),
            print_summary: false,
            summary_depth: 6,
        }
    }
}

/// Validate tree command arguments before doing any work
///
/// **Public** - called by main.rs ahead of execute_tree
pub fn validate_args(args: &TreeArgs) -> Result<()> {
    if args.input.as_os_str().is_empty() {
        bail!("Input report path is empty");
    }
    if !args.input.exists() {
        bail!("Input report not found: {}", args.input.display());
    }
    if args.output.as_os_str().is_empty() {
        bail!("Output path is empty");
    }
    Ok(())
}

/// Execute the tree command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Report loading or parse errors
/// * Batch indexes out of range
/// * File write errors
pub fn execute_tree(args: TreeArgs) -> Result<()> {
    info!("Building trace tree from report: {}", args.input.display());

    // Step 1: Load the report
    info!("Step 1/4: Loading report...");
    let report = read_report(&args.input).context("Failed to load query count report")?;

    // Step 2: Select the query batch
    info!(
        "Step 2/4: Selecting batch (test case {}, API call {})...",
        args.test_case, args.api_call
    );
    let batch = report
        .query_batch(args.test_case, args.api_call)
        .context("Failed to select query batch from report")?;

    let case = &report.test_cases[args.test_case];
    let call = &case.queries[args.api_call];
    debug!(
        "Selected batch: {} {} with {} recorded queries",
        call.method,
        call.path,
        batch.len()
    );

    // Step 3: Format, build, squash
    info!("Step 3/4: Building and squashing trace tree...");
    let formatter = TraceFormatter::with_replacements(args.replacements.clone());
    let formatted = formatter.format_records(batch);
    let tree = squash(build_tree(&formatted));

    debug!(
        "Squashed tree: {} top-level branches, {} queries total",
        tree.children.len(),
        tree.total
    );

    // Step 4: Write output
    info!("Step 4/4: Writing tree profile...");
    let profile = to_tree_profile(
        tree,
        case.id.clone(),
        format!("{} {}", call.method, call.path),
    );
    write_tree(&profile, &args.output).context("Failed to write tree profile")?;

    if args.print_summary {
        println!();
        println!("{}", render_text(&profile.tree, args.summary_depth));
        println!();
    }

    info!("Done. Tree profile written to {}", args.output.display());

    Ok(())
}

/// Parse a `--strip-prefix` rule of the form `OLD[=NEW]`
///
/// **Public** - used by main.rs; a bare `OLD` strips the prefix entirely
pub fn parse_replacement(rule: &str) -> (String, String) {
    match rule.split_once('=') {
        Some((pattern, replacement)) => (pattern.to_string(), replacement.to_string()),
        None => (rule.to_string(), String::new()),
    }
}
