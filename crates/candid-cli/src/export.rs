//! CSV export
//!
//! Serializes the results to comma-separated text with a header row and no
//! index column, and packages it as the downloadable `output.csv` artifact.

use crate::error::{CliError, Result};
use crate::fetch::FetchOutcome;
use candid_common::types::{OrganizationSummary, COLUMNS};
use csv::{ReaderBuilder, Terminator, WriterBuilder};
use std::io::Write;
use std::path::Path;
use tracing::info;

/// File name of the exported artifact
pub const OUTPUT_FILE_NAME: &str = "output.csv";

/// MIME type of the exported artifact
pub const OUTPUT_MIME_TYPE: &str = "text/csv";

/// Exported results ready to be saved or streamed
#[derive(Debug, Clone)]
pub struct ExportArtifact {
    pub file_name: &'static str,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

impl ExportArtifact {
    /// Render one row per outcome, in order
    pub fn from_outcomes(outcomes: &[FetchOutcome]) -> Result<Self> {
        let rows: Vec<OrganizationSummary> =
            outcomes.iter().map(FetchOutcome::to_summary).collect();
        Ok(Self {
            file_name: OUTPUT_FILE_NAME,
            mime_type: OUTPUT_MIME_TYPE,
            bytes: render_csv(&rows)?,
        })
    }

    /// Save to `path`; a directory receives `output.csv` inside it
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<std::path::PathBuf> {
        let path = path.as_ref();
        let target = if path.is_dir() {
            path.join(self.file_name)
        } else {
            path.to_path_buf()
        };

        if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&target, &self.bytes)?;

        info!(
            path = %target.display(),
            mime_type = self.mime_type,
            bytes = self.bytes.len(),
            "Export written"
        );
        Ok(target)
    }

    /// Stream to any writer (stdout for `-o -`)
    pub fn write_into<W: Write>(&self, mut writer: W) -> Result<()> {
        writer.write_all(&self.bytes)?;
        writer.flush()?;
        Ok(())
    }
}

/// Render rows as CSV with a header line
pub fn render_csv(rows: &[OrganizationSummary]) -> Result<Vec<u8>> {
    let mut writer = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(COLUMNS)?;
    for row in rows {
        writer.write_record(row.fields())?;
    }

    writer
        .into_inner()
        .map_err(|e| CliError::Io(e.into_error()))
}

/// Parse CSV produced by [`render_csv`] back into rows
pub fn read_csv(bytes: &[u8]) -> Result<Vec<OrganizationSummary>> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(bytes);

    let headers = reader.headers()?;
    if !headers.iter().eq(COLUMNS.iter().copied()) {
        return Err(CliError::Other(anyhow::anyhow!(
            "unexpected export header: {}",
            headers.iter().collect::<Vec<_>>().join(",")
        )));
    }

    reader
        .records()
        .map(|record| {
            let record = record?;
            Ok(OrganizationSummary::from_fields(record.iter())?)
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::fetch::FetchError;
    use proptest::prelude::*;
    use reqwest::StatusCode;

    fn populated() -> OrganizationSummary {
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
    }

    #[test]
    fn test_render_header_and_rows() {
        let csv = String::from_utf8(render_csv(&[populated()]).unwrap()).unwrap();
        let mut lines = csv.lines();
        assert_eq!(
            lines.next().unwrap(),
            "organization_name,ein,address,website,demographics_status,no_of_employees,no_of_volunteers,year_founded,total_revenue,total_expenses,total_assets"
        );
        assert_eq!(
            lines.next().unwrap(),
            "Helping Hands Foundation,12-3456789,\"1 Main St, Springfield, IL 62701\",https://helpinghands.org,Demographics via Candid,12,40,1987,1500000,1200000,3000000"
        );
        assert!(lines.next().is_none());
        assert!(!csv.contains('\r'));
    }

    #[test]
    fn test_empty_table_is_header_only() {
        let csv = String::from_utf8(render_csv(&[]).unwrap()).unwrap();
        assert_eq!(csv.lines().count(), 1);
    }

    #[test]
    fn test_artifact_from_outcomes() {
        let outcomes = vec![
            FetchOutcome::Success(populated()),
            FetchOutcome::Failure {
                ein: "000000000".to_string(),
                error: FetchError::Status {
                    status: StatusCode::NOT_FOUND,
                },
            },
        ];
        let artifact = ExportArtifact::from_outcomes(&outcomes).unwrap();
        assert_eq!(artifact.file_name, "output.csv");
        assert_eq!(artifact.mime_type, "text/csv");

        let rows = read_csv(&artifact.bytes).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], populated());
        assert_eq!(rows[1], OrganizationSummary::error_row("000000000"));
    }

    #[test]
    fn test_write_to_directory_uses_fixed_name() {
        let dir = tempfile::tempdir().unwrap();
        let artifact = ExportArtifact::from_outcomes(&[]).unwrap();
        let written = artifact.write_to(dir.path()).unwrap();
        assert_eq!(written, dir.path().join(OUTPUT_FILE_NAME));
        assert_eq!(std::fs::read(&written).unwrap(), artifact.bytes);
    }

    #[test]
    fn test_write_to_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("reports/2024/results.csv");
        let artifact = ExportArtifact::from_outcomes(&[]).unwrap();
        assert_eq!(artifact.write_to(&target).unwrap(), target);
        assert!(target.is_file());
    }

    #[test]
    fn test_write_into_writer() {
        let artifact = ExportArtifact::from_outcomes(&[]).unwrap();
        let mut buf = Vec::new();
        artifact.write_into(&mut buf).unwrap();
        assert_eq!(buf, artifact.bytes);
    }

    #[test]
    fn test_read_rejects_foreign_header() {
        assert!(read_csv(b"EIN,Name\n1,2\n").is_err());
    }

    proptest! {
        #[test]
        fn prop_export_round_trips(
            rows in proptest::collection::vec(proptest::collection::vec(".*", 11), 0..8)
        ) {
            let rows: Vec<OrganizationSummary> = rows
                .into_iter()
                .map(|fields| OrganizationSummary::from_fields(fields).unwrap())
                .collect();
            let bytes = render_csv(&rows).unwrap();
            prop_assert_eq!(read_csv(&bytes).unwrap(), rows);
        }
    }
}
