//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors that can occur while loading and parsing a query count report
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Failed to read report file: {0}")]
    ReadFailed(#[from] std::io::Error),

    #[error("JSON deserialization failed: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid report format: {0}")]
    InvalidFormat(String),

    #[error("Test case index {index} out of range (report has {available} test cases)")]
    TestCaseOutOfRange { index: usize, available: usize },

    #[error("API call index {index} out of range (test case '{test_case}' has {available} API calls)")]
    ApiCallOutOfRange {
        index: usize,
        test_case: String,
        available: usize,
    },
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
