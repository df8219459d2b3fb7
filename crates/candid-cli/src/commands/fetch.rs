//! `candid fetch` command implementation
//!
//! Loads the input file, fetches every EIN in order, previews the results
//! and writes `output.csv`.

use crate::api::CandidClient;
use crate::config::{Config, API_KEY_ENV};
use crate::error::{CliError, Result};
use crate::export::ExportArtifact;
use crate::fetch::{fetch_all, BatchStats};
use crate::input::InputTable;
use crate::progress;
use candid_common::types::{OrganizationSummary, COLUMNS};
use colored::Colorize;
use inquire::{Password, PasswordDisplayMode};
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing::{debug, info};

/// Output target meaning "write CSV to stdout"
pub const STDOUT_TARGET: &str = "-";

/// Options for one fetch run
#[derive(Debug, Clone)]
pub struct FetchOptions {
    /// CSV file with an `EIN` column
    pub input: PathBuf,

    /// Output file or directory, or `-` for stdout
    pub output: String,

    /// Rows to show in the preview table; 0 disables it
    pub preview_rows: usize,

    /// Whether the API key may be prompted for
    pub interactive: bool,
}

/// Run the full pipeline
pub async fn run(config: Config, options: FetchOptions) -> Result<()> {
    // Validation happens before the key prompt and before any request.
    let table = InputTable::load(&options.input)?;
    info!(input = %options.input.display(), rows = table.len(), "Loaded input file");

    let api_key = resolve_api_key(&config, options.interactive)?;
    let client = CandidClient::from_config(&config)?;
    debug!(config = ?config, "Starting batch");

    let to_stdout = options.output == STDOUT_TARGET;
    eprintln!("{} Processing {} EIN(s)...", "→".cyan(), table.len());

    let identifiers: Vec<&str> = table.identifiers().collect();
    let pb = progress::create_batch_progress(
        identifiers.len() as u64,
        std::io::stderr().is_terminal(),
    );
    let outcomes = fetch_all(&client, identifiers.iter().copied(), &api_key, |idx, outcome| {
        progress::record_outcome(&pb, identifiers[idx], outcome)
    })
    .await;
    pb.finish_and_clear();

    let stats = BatchStats::from_outcomes(&outcomes);
    eprintln!(
        "{} Processing complete! {} succeeded, {} failed",
        "✓".green(),
        stats.succeeded,
        stats.failed
    );

    let artifact = ExportArtifact::from_outcomes(&outcomes)?;

    if to_stdout {
        artifact.write_into(std::io::stdout().lock())?;
        return Ok(());
    }

    if options.preview_rows > 0 {
        let rows: Vec<OrganizationSummary> = outcomes.iter().map(|o| o.to_summary()).collect();
        println!("{}", "Preview of the output data:".bold());
        print!("{}", format_preview(&rows, options.preview_rows));
    }

    let written = artifact.write_to(&options.output)?;
    eprintln!(
        "{} Output written to: {} ({})",
        "✓".green(),
        written.display().to_string().cyan(),
        artifact.mime_type
    );

    Ok(())
}

/// Key from flag or environment, else a hidden prompt when interactive
fn resolve_api_key(config: &Config, interactive: bool) -> Result<String> {
    if let Some(key) = &config.api_key {
        return Ok(key.clone());
    }

    if !interactive {
        return Err(CliError::config(format!(
            "No Candid API key provided. Pass --api-key or set {}",
            API_KEY_ENV
        )));
    }

    let key = Password::new("Enter your Candid API key:")
        .without_confirmation()
        .with_display_mode(PasswordDisplayMode::Hidden)
        .prompt()?;

    if key.trim().is_empty() {
        return Err(CliError::config("The API key cannot be empty"));
    }
    Ok(key)
}

/// Format the first `limit` rows as a table
fn format_preview(rows: &[OrganizationSummary], limit: usize) -> String {
    use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Table};

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_header(COLUMNS);

    for row in rows.iter().take(limit) {
        table.add_row(row.fields());
    }

    let mut out = format!("{}\n", table);
    if rows.len() > limit {
        out.push_str(&format!("... and {} more row(s)\n", rows.len() - limit));
    }
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::export::{read_csv, OUTPUT_FILE_NAME};
    use serde_json::json;
    use wiremock::{
        matchers::{header, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    fn config_for(server: &MockServer) -> Config {
        Config::new().with_overrides(Some(server.uri()), Some("test-key".to_string()))
    }

    fn write_input(dir: &tempfile::TempDir, contents: &str) -> PathBuf {
        let path = dir.path().join("input.csv");
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[tokio::test]
    async fn test_success_and_not_found_scenario() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/123456789"))
            .and(header("Subscription-Key", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": {
                    "summary": {
                        "organization_name": "Helping Hands Foundation",
                        "ein": "12-3456789",
                        "address_line_1": "1 Main St",
                        "city": "Springfield",
                        "state": "IL",
                        "zip": "62701",
                        "website_url": "https://helpinghands.org",
                        "demographics_status": "Demographics via Candid",
                        "year_founded": 1987
                    },
                    "operations": { "no_of_employees": 12, "no_of_volunteers": 40 },
                    "financials": {
                        "most_recent_year_financials": {
                            "total_revenue": 1500000,
                            "expenses_total": 1200000,
                            "assets_total": 3000000
                        }
                    }
                }
            })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/000000000"))
            .respond_with(ResponseTemplate::new(404))
            .expect(1)
            .mount(&server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let input = write_input(&dir, "EIN\n123456789\n000000000\n");
        let options = FetchOptions {
            input,
            output: dir.path().display().to_string(),
            preview_rows: 0,
            interactive: false,
        };

        run(config_for(&server), options).await.unwrap();

        let bytes = std::fs::read(dir.path().join(OUTPUT_FILE_NAME)).unwrap();
        let rows = read_csv(&bytes).unwrap();
        assert_eq!(rows.len(), 2);

        assert_eq!(
            rows[0],
            OrganizationSummary::from_fields([
                "Helping Hands Foundation",
                "12-3456789",
                "1 Main St, Springfield, IL 62701",
                "https://helpinghands.org",
                "Demographics via Candid",
                "12",
                "40",
                "1987",
                "1500000",
                "1200000",
                "3000000",
            ])
            .unwrap()
        );
        assert_eq!(rows[1], OrganizationSummary::error_row("000000000"));
    }

    #[tokio::test]
    async fn test_missing_column_makes_no_requests() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let input = write_input(&dir, "Name\nAcme\n");
        let options = FetchOptions {
            input,
            output: dir.path().display().to_string(),
            preview_rows: 0,
            interactive: false,
        };

        let err = run(config_for(&server), options).await.unwrap_err();
        assert!(matches!(err, CliError::MissingColumn(_, _)));
        assert!(!dir.path().join(OUTPUT_FILE_NAME).exists());
    }

    #[test]
    fn test_resolve_api_key_from_config() {
        let config = Config::new().with_overrides(None, Some("abc".to_string()));
        assert_eq!(resolve_api_key(&config, false).unwrap(), "abc");
    }

    #[test]
    fn test_resolve_api_key_missing_non_interactive() {
        let err = resolve_api_key(&Config::new(), false).unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
        assert!(err.to_string().contains(API_KEY_ENV));
    }

    #[test]
    fn test_format_preview_limits_rows() {
        let rows: Vec<_> = (0..3)
            .map(|i| OrganizationSummary::error_row(format!("00000000{i}")))
            .collect();
        let preview = format_preview(&rows, 2);
        assert!(preview.contains("organization_name"));
        assert!(preview.contains("000000000"));
        assert!(preview.contains("000000001"));
        assert!(!preview.contains("000000002"));
        assert!(preview.contains("... and 1 more row(s)"));
    }
}
