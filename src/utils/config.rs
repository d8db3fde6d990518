//! Configuration and constants for the CLI.

/// Current output schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Sentinel label for the root of a trace tree
pub const ROOT_LABEL: &str = "<root>";

/// Default test case index when none is given on the command line
pub const DEFAULT_TEST_CASE: usize = 0;

/// Default API call index when none is given on the command line
pub const DEFAULT_API_CALL: usize = 0;

/// Separator between chained labels in text output
pub const TRACE_CHAIN_SEPARATOR: &str = " > ";
