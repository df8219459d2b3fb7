//! Error types shared across the workspace

use thiserror::Error;

/// Result type alias for common operations
pub type Result<T> = std::result::Result<T, CommonError>;

/// Main error type for shared functionality
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommonError {
    #[error("Record has {actual} fields, expected {expected}")]
    FieldCount { expected: usize, actual: usize },
}
