//! Report parsing and schema definitions.
//!
//! This module handles:
//! - Deserializing query count report JSON
//! - Selecting a query batch out of the nested report structure
//! - Defining the record types consumed by the formatter and tree builder

pub mod report;

// Re-export main types
pub use report::{parse_report, read_report, ApiCall, QueryRecord, Report, StackFrame, TestCase};
