//! Candid Explorer Common Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Shared types, logging, and error handling for the Candid Explorer workspace.
//!
//! # Overview
//!
//! - **Error Handling**: Common error and result types
//! - **Logging**: Centralized `tracing` setup for every binary
//! - **Types**: The flattened organization record and its sentinel values
//!
//! # Example
//!
//! ```
//! use candid_common::types::{OrganizationSummary, ERROR_SENTINEL};
//!
//! let row = OrganizationSummary::error_row("000000000");
//! assert_eq!(row.ein, "000000000");
//! assert_eq!(row.organization_name, ERROR_SENTINEL);
//! ```

pub mod error;
pub mod logging;
pub mod types;

// Re-export commonly used types
pub use error::{CommonError, Result};
pub use types::OrganizationSummary;
