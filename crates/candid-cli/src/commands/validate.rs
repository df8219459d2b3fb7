//! `candid validate` command implementation
//!
//! Runs the input checks without contacting the API.

use crate::error::Result;
use crate::input::{InputTable, EIN_COLUMN};
use colored::Colorize;
use std::path::Path;

/// Validate an input file and report what a fetch would do
pub async fn run(input: &Path) -> Result<()> {
    let table = InputTable::load(input)?;

    println!("{} {} is valid", "✓".green(), input.display().to_string().cyan());
    println!("  Columns:     {}", table.headers().join(", "));
    println!("  {:<12} {}", format!("{} rows:", EIN_COLUMN), table.len());

    let blank = table.identifiers().filter(|id| id.trim().is_empty()).count();
    if blank > 0 {
        println!(
            "  {} {} row(s) have an empty {}",
            "!".yellow(),
            blank,
            EIN_COLUMN
        );
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::error::CliError;

    #[tokio::test]
    async fn test_validate_ok() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.csv");
        std::fs::write(&path, "EIN,Name\n123456789,Acme\n").unwrap();
        assert!(run(&path).await.is_ok());
    }

    #[tokio::test]
    async fn test_validate_missing_column() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.csv");
        std::fs::write(&path, "Ein\n123456789\n").unwrap();
        assert!(matches!(
            run(&path).await.unwrap_err(),
            CliError::MissingColumn(_, _)
        ));
    }
}
