//! Query Trace Studio
//!
//! Call-site trace tree aggregation for database query count reports.
//!
//! Consumes a query-count report (SQL statements annotated with call
//! stacktraces) and reorganizes one batch of queries into a prefix tree
//! keyed by call-site, then squashes singleton chains for compact display.
//!
//! This crate provides the core implementation for the
//! `query-trace` CLI tool.
//!
//! ## Getting Started
//!
//! Most users should install and use the CLI:
//!
//! ```bash
//! cargo install query-trace-studio
//! query-trace --help
//! ```

pub mod commands;
pub mod formatter;
pub mod output;
pub mod parser;
pub mod tree;
pub mod utils;
