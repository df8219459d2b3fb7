//! CLI command implementations
//!
//! Each subcommand has its own module with a `run` function.

pub mod config;
pub mod fetch;
pub mod validate;
