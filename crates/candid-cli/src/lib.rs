//! Candid CLI Library
//!
//! Batch lookup of nonprofit organizations in the Candid Premier API.
//!
//! # Overview
//!
//! Given a CSV file with an `EIN` column, the CLI requests each organization
//! from the API, flattens a fixed set of fields into one row per EIN, and
//! writes the rows to `output.csv`:
//!
//! - **Fetching**: Run the whole batch (`candid fetch`)
//! - **Validation**: Check an input file without any requests (`candid validate`)
//! - **Configuration**: Show effective settings (`candid config show`)

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod export;
pub mod fetch;
pub mod input;
pub mod progress;

// Re-export commonly used types
pub use error::{CliError, Result};
pub use fetch::{FetchError, FetchOutcome};
pub use input::InputTable;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Candid EIN Data Explorer
#[derive(Parser, Debug)]
#[command(name = "candid")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Candid API base URL
    #[arg(long, env = "CANDID_API_URL", global = true)]
    pub api_url: Option<String>,

    /// Print the CLI reference as Markdown and exit
    #[arg(long, hide = true)]
    pub markdown_help: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch organization data for every EIN in a CSV file
    Fetch {
        /// CSV file with a column named `EIN`
        input: PathBuf,

        /// Output file or directory ("-" writes CSV to stdout)
        #[arg(short, long, default_value = export::OUTPUT_FILE_NAME)]
        output: String,

        /// Candid API subscription key (prompted for when omitted)
        #[arg(long, env = "CANDID_API_KEY", hide_env_values = true)]
        api_key: Option<String>,

        /// Number of rows to show in the preview table
        #[arg(long, default_value_t = 10)]
        preview_rows: usize,

        /// Skip the preview table
        #[arg(long)]
        no_preview: bool,
    },

    /// Check an input file without contacting the API
    Validate {
        /// CSV file with a column named `EIN`
        input: PathBuf,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

/// Configuration subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show all configuration
    Show,
}
