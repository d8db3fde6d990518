//! Query count report schema and loading.
//!
//! The report is produced by an external query-count tool. It nests queries
//! by test case and API call:
//!
//! `test_cases[i].queries[j].queries` is the flat batch of query records
//! this crate aggregates into a trace tree.

use crate::utils::error::ParseError;
use log::debug;
use serde::de::{self, Deserializer, SeqAccess, Visitor};
use serde::ser::{SerializeSeq, Serializer};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::path::Path;

/// Top-level query count report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Total number of queries recorded across the whole run
    pub total: u64,

    /// Per-test-case query breakdowns
    pub test_cases: Vec<TestCase>,
}

/// Queries recorded during one test case
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestCase {
    /// Test case identifier (module, class and method name)
    pub id: String,

    /// Total number of queries recorded in this test case
    pub total: u64,

    /// Queries grouped by the API call that triggered them
    pub queries: Vec<ApiCall>,
}

/// Queries issued while serving one API call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiCall {
    /// HTTP method
    pub method: String,

    /// Request path
    pub path: String,

    /// Number of queries issued by this call
    pub total: u64,

    /// The recorded queries, with stacktraces
    #[serde(default)]
    pub queries: Vec<QueryRecord>,
}

/// A single recorded database query
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryRecord {
    /// Raw SQL text as captured by the recorder
    pub sql: String,

    /// Call stack at the point the query was issued, outermost frame first
    pub stacktrace: Vec<StackFrame>,
}

/// One frame of a captured stacktrace
///
/// Serialized on the wire as a 3-element array
/// `[filePath, lineNumber, functionName]`, matching the recorder's output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackFrame {
    pub file_path: String,
    pub line_number: u32,
    pub function_name: String,
}

impl StackFrame {
    pub fn new(file_path: impl Into<String>, line_number: u32, function_name: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
            line_number,
            function_name: function_name.into(),
        }
    }
}

impl Serialize for StackFrame {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(3))?;
        seq.serialize_element(&self.file_path)?;
        seq.serialize_element(&self.line_number)?;
        seq.serialize_element(&self.function_name)?;
        seq.end()
    }
}

impl<'de> Deserialize<'de> for StackFrame {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct FrameVisitor;

        impl<'de> Visitor<'de> for FrameVisitor {
            type Value = StackFrame;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a [filePath, lineNumber, functionName] array")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<StackFrame, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let file_path = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(0, &self))?;
                let line_number = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(1, &self))?;
                let function_name = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(2, &self))?;
                Ok(StackFrame {
                    file_path,
                    line_number,
                    function_name,
                })
            }
        }

        deserializer.deserialize_seq(FrameVisitor)
    }
}

impl Report {
    /// Select one query batch out of the nested report structure
    ///
    /// **Public** - used by the tree command to pick its input
    ///
    /// # Arguments
    /// * `test_case` - index into `test_cases`
    /// * `api_call` - index into that test case's `queries`
    ///
    /// # Errors
    /// * `ParseError::TestCaseOutOfRange` / `ParseError::ApiCallOutOfRange`
    ///   when an index does not exist in the report
    pub fn query_batch(&self, test_case: usize, api_call: usize) -> Result<&[QueryRecord], ParseError> {
        let case = self
            .test_cases
            .get(test_case)
            .ok_or(ParseError::TestCaseOutOfRange {
                index: test_case,
                available: self.test_cases.len(),
            })?;

        let call = case.queries.get(api_call).ok_or_else(|| ParseError::ApiCallOutOfRange {
            index: api_call,
            test_case: case.id.clone(),
            available: case.queries.len(),
        })?;

        Ok(&call.queries)
    }
}

/// Parse a report from an already-loaded JSON value
///
/// **Public** - entry point for in-memory report data
///
/// # Errors
/// * `ParseError::JsonError` - value does not match the report schema
pub fn parse_report(value: &serde_json::Value) -> Result<Report, ParseError> {
    let report: Report = serde_json::from_value(value.clone())?;
    debug!(
        "Parsed report: {} queries across {} test cases",
        report.total,
        report.test_cases.len()
    );
    Ok(report)
}

/// Read and parse a report JSON file
///
/// **Public** - main entry point for report loading
///
/// # Errors
/// * `ParseError::ReadFailed` - file cannot be opened
/// * `ParseError::JsonError` - file is not valid report JSON
pub fn read_report(path: impl AsRef<Path>) -> Result<Report, ParseError> {
    let path = path.as_ref();
    debug!("Reading report from: {}", path.display());

    let file = File::open(path)?;
    let report: Report = serde_json::from_reader(file)?;

    debug!(
        "Report loaded: {} queries across {} test cases",
        report.total,
        report.test_cases.len()
    );

    Ok(report)
}
