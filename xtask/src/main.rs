//! Build automation tasks
//!
//! Currently generates the Markdown CLI reference from the clap definitions.

use clap::Parser;
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build automation tasks for the Candid CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Generate the CLI reference in Markdown
    GenerateCliDocs {
        /// Output directory for generated documentation
        #[arg(short, long, default_value = "docs")]
        output_dir: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::GenerateCliDocs { output_dir } => generate_cli_docs(&output_dir)?,
    }

    Ok(())
}

fn generate_cli_docs(output_dir: &str) -> anyhow::Result<()> {
    println!("Generating CLI documentation...");

    let markdown = clap_markdown::help_markdown::<candid_cli::Cli>();

    let content = format!(
        r#"# Candid CLI Reference

Generated from the CLI source code on {}.

## Overview

`candid` looks up every EIN in a CSV file in the Candid Premier v3 API and
writes one flattened row per EIN to `output.csv`. Rows whose lookup fails
keep their EIN and read `Error` in every other column; fields the API did
not return read `N/A`.

## Quick Start

```bash
# Check the input file first (no API calls)
candid validate eins.csv

# Fetch everything; prompts for the key if CANDID_API_KEY is not set
candid fetch eins.csv --output output.csv

# Stream CSV to another tool
candid fetch eins.csv -o - --api-key "$CANDID_API_KEY" | head
```

## Commands

{}

## Environment Variables

- `CANDID_API_KEY` - Subscription key sent in the `Subscription-Key` header
- `CANDID_API_URL` - API base URL (default: `https://api.candid.org/premier/v3`)
- `CANDID_API_TIMEOUT_SECS` - Request timeout in seconds (default: none)
- `LOG_LEVEL`, `LOG_OUTPUT`, `LOG_FORMAT`, `LOG_DIR` - Logging settings

---

*To update, run `cargo xtask generate-cli-docs`.*
"#,
        chrono::Utc::now().format("%Y-%m-%d"),
        markdown
    );

    let output_path = PathBuf::from(output_dir);
    fs::create_dir_all(&output_path)?;

    let file_path = output_path.join("cli-reference.md");
    fs::write(&file_path, content)?;

    println!("✅ Generated CLI documentation at: {}", file_path.display());

    Ok(())
}
