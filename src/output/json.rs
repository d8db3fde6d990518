//! JSON tree profile output writer.
//!
//! Writes squashed trace trees to JSON files with proper formatting.
//! Schema is versioned to allow future evolution.

use crate::tree::TraceNode;
use crate::utils::config::SCHEMA_VERSION;
use crate::utils::error::OutputError;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Top-level tree profile structure written to JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeProfile {
    /// Schema version for compatibility checking
    pub version: String,

    /// Test case the tree was built from
    pub test_case: String,

    /// API call (method and path) the tree was built from
    pub api_call: String,

    /// Number of query records in the batch
    pub query_count: u64,

    /// The squashed trace tree
    pub tree: TraceNode,

    /// Timestamp when the profile was generated
    pub generated_at: String,
}

/// Wrap a squashed tree in the output profile format
///
/// **Public** - used by commands to create final output
pub fn to_tree_profile(
    tree: TraceNode,
    test_case: impl Into<String>,
    api_call: impl Into<String>,
) -> TreeProfile {
    use chrono::Utc;

    TreeProfile {
        version: SCHEMA_VERSION.to_string(),
        test_case: test_case.into(),
        api_call: api_call.into(),
        query_count: tree.total,
        tree,
        generated_at: Utc::now().to_rfc3339(),
    }
}

/// Write a tree profile to a JSON file
///
/// **Public** - main entry point for JSON output
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - path cannot be created or is invalid
pub fn write_tree(profile: &TreeProfile, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing tree profile to: {}", output_path.display());

    validate_output_path(output_path)?;

    // Create parent directories if needed
    if let Some(parent) = output_path.parent() {
        if !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, profile).map_err(OutputError::SerializationFailed)?;

    info!("Tree profile written successfully");

    Ok(())
}

/// Read a tree profile from a JSON file
///
/// **Public** - useful for validation and testing
///
/// # Errors
/// * `OutputError::WriteFailed` - file read error (reusing WriteFailed for I/O)
/// * `OutputError::SerializationFailed` - JSON parse error
pub fn read_tree(input_path: impl AsRef<Path>) -> Result<TreeProfile, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading tree profile from: {}", input_path.display());

    let file = File::open(input_path).map_err(OutputError::WriteFailed)?;
    let profile: TreeProfile = serde_json::from_reader(file).map_err(OutputError::SerializationFailed)?;

    debug!(
        "Tree profile loaded: version {}, test case {}",
        profile.version, profile.test_case
    );

    Ok(profile)
}

/// Validate that output path is writable
///
/// **Private** - internal validation
fn validate_output_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.exists() && path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}
