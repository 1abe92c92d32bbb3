//! CLI error types

use std::path::PathBuf;

/// Errors that stop the CLI before a table is printed.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// The input file could not be read.
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input is not valid JSON.
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The input JSON is not an array of records.
    #[error("Expected a JSON array of objects")]
    NotAnArray,

    /// An element of the input array is not an object.
    #[error("Element {index} is not a JSON object")]
    BadRecord { index: usize },

    /// A `--filter` expression could not be parsed.
    #[error("Bad filter '{expr}': {reason}")]
    BadFilter { expr: String, reason: &'static str },

    /// The log file could not be created.
    #[error("Failed to create log file {path}: {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A logger was already installed.
    #[error("Failed to initialize logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}

impl CliError {
    /// Creates a new bad filter error.
    pub fn bad_filter(expr: impl Into<String>, reason: &'static str) -> Self {
        Self::BadFilter {
            expr: expr.into(),
            reason,
        }
    }
}
