//! Stack frame and SQL formatting ahead of tree construction.
//!
//! Formatting must run once per frame, before any tree is built: the tree's
//! branching structure is defined by the identity of the formatted strings,
//! so two raw frames differing only in a stripped path prefix must collapse
//! to the same tree edge.

use crate::parser::{QueryRecord, StackFrame};
use log::debug;

/// A query record after formatting, ready for tree insertion
///
/// **Public** - the tree builder's input type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedQuery {
    /// SQL text with double quotes stripped
    pub sql: String,

    /// Formatted frame keys, outermost first
    pub stacktrace: Vec<String>,
}

/// Formats raw stack frames into call-site keys
///
/// Path shortening applies an ordered list of literal replacement rules.
/// Every rule is checked in list order; each rule replaces the first
/// occurrence of its pattern in the path.
#[derive(Debug, Clone, Default)]
pub struct TraceFormatter {
    replacements: Vec<(String, String)>,
}

impl TraceFormatter {
    /// Create a formatter with no path replacement rules
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a formatter from an existing rule list
    pub fn with_replacements(replacements: Vec<(String, String)>) -> Self {
        Self { replacements }
    }

    /// Append one replacement rule; rules apply in insertion order
    pub fn add_replacement(&mut self, pattern: impl Into<String>, replacement: impl Into<String>) {
        self.replacements.push((pattern.into(), replacement.into()));
    }

    /// Format one stack frame into its call-site key
    ///
    /// **Public** - produces `"{shortenedPath}:{lineNumber}>{functionName}"`
    pub fn format_frame(&self, frame: &StackFrame) -> String {
        let path = self.shorten_path(&frame.file_path);
        format!("{}:{}>{}", path, frame.line_number, frame.function_name)
    }

    /// Apply all replacement rules to a file path
    fn shorten_path(&self, file_path: &str) -> String {
        let mut path = file_path.to_string();
        for (pattern, replacement) in &self.replacements {
            path = path.replacen(pattern.as_str(), replacement, 1);
        }
        path
    }

    /// Format one record: SQL cleanup plus per-frame keys
    pub fn format_record(&self, record: &QueryRecord) -> FormattedQuery {
        FormattedQuery {
            sql: format_sql(&record.sql),
            stacktrace: record
                .stacktrace
                .iter()
                .map(|frame| self.format_frame(frame))
                .collect(),
        }
    }

    /// Format a whole query batch
    ///
    /// **Public** - main preprocessing entry point for the tree pipeline
    pub fn format_records(&self, records: &[QueryRecord]) -> Vec<FormattedQuery> {
        debug!(
            "Formatting {} query records with {} path replacement rules",
            records.len(),
            self.replacements.len()
        );
        records.iter().map(|record| self.format_record(record)).collect()
    }
}

/// Strip double quotes from SQL text
///
/// Purely cosmetic; has no effect on tree structure.
pub fn format_sql(sql: &str) -> String {
    sql.replace('"', "")
}
