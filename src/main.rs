//! Query Trace Studio CLI
//!
//! Turns database query count reports into call-site trace trees.
//! Shows which code paths issued which queries.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use query_trace_studio::commands::tree::parse_replacement;
use query_trace_studio::commands::{
    display_schema, display_version, execute_tree, validate_args, validate_tree_file, TreeArgs,
};

/// Query Trace Studio - call-site trace trees for query count reports
#[derive(Parser, Debug)]
#[command(name = "query-trace")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Build a squashed trace tree from a query count report
    Tree {
        /// Path to the query count report JSON
        #[arg(short, long)]
        input: PathBuf,

        /// Output path for the tree profile JSON
        #[arg(short, long, default_value = "trace-tree.json")]
        output: PathBuf,

        /// Index of the test case to aggregate
        #[arg(long, default_value = "0")]
        test_case: usize,

        /// Index of the API call within the test case
        #[arg(long, default_value = "0")]
        api_call: usize,

        /// Path replacement rule OLD[=NEW], repeatable, applied in order
        #[arg(long = "strip-prefix", value_name = "OLD[=NEW]")]
        strip_prefix: Vec<String>,

        /// Print text summary to stdout
        #[arg(long)]
        summary: bool,

        /// Deepest tree level shown in the text summary
        #[arg(long, default_value = "6")]
        summary_depth: usize,
    },

    /// Validate a tree profile JSON file
    Validate {
        /// Path to tree profile JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Tree {
            input,
            output,
            test_case,
            api_call,
            strip_prefix,
            summary,
            summary_depth,
        } => {
            let replacements = strip_prefix
                .iter()
                .map(|rule| parse_replacement(rule))
                .collect();

            let args = TreeArgs {
                input,
                output,
                test_case,
                api_call,
                replacements,
                print_summary: summary,
                summary_depth,
            };

            // Validate args first
            validate_args(&args)?;

            // Execute tree build
            execute_tree(args)?;
        }

        Commands::Validate { file } => {
            validate_tree_file(file)?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
