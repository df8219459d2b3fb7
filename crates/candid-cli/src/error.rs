//! Error types for the Candid CLI
//!
//! User-facing errors with clear, actionable messages. Per-record fetch
//! failures are not represented here: they are recovered inside the batch
//! (see [`crate::fetch::FetchError`]) and never stop a run.

use thiserror::Error;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Comprehensive error type for CLI operations
#[derive(Error, Debug)]
pub enum CliError {
    /// Input file lacks the identifier column
    #[error("The input file must contain a column named '{0}' (case-sensitive). Found columns: {1}.")]
    MissingColumn(String, String),

    /// Required file is missing
    #[error("File not found: '{0}'. Verify the file path exists and you have read permissions.")]
    FileNotFound(String),

    /// CSV reading or writing failed
    #[error("Failed to process CSV: {0}. Check that the file is valid comma-separated text with a header row.")]
    Csv(#[from] csv::Error),

    /// Exported record could not be rebuilt
    #[error("Invalid record: {0}")]
    Record(#[from] candid_common::CommonError),

    /// File system operation failed
    #[error("File operation failed: {0}. Check file permissions and disk space.")]
    Io(#[from] std::io::Error),

    /// HTTP client could not be constructed
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration is missing or invalid
    #[error("Configuration error: {0}. Check your environment variables or command-line flags.")]
    Config(String),

    /// Interactive prompt failed or was cancelled
    #[error("Prompt failed: {0}")]
    Prompt(#[from] inquire::InquireError),

    /// Generic anyhow error wrapper
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CliError {
    /// Create a missing column error listing the columns that were found
    pub fn missing_column(column: impl Into<String>, found: &[String]) -> Self {
        let found = if found.is_empty() {
            "(none)".to_string()
        } else {
            found.join(", ")
        };
        Self::MissingColumn(column.into(), found)
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
