//! Input loading
//!
//! Parses the uploaded CSV into a table of named columns and locates the
//! identifier column. Values are kept exactly as written: no trimming, no
//! numeric coercion, so identifiers like `000000000` survive intact.

use crate::error::{CliError, Result};
use csv::{ReaderBuilder, StringRecord};
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Name of the column holding the identifiers. Matched exactly.
pub const EIN_COLUMN: &str = "EIN";

const UTF8_BOM: &str = "\u{feff}";

/// Parsed input file
#[derive(Debug, Clone)]
pub struct InputTable {
    headers: Vec<String>,
    records: Vec<StringRecord>,
    ein_index: usize,
}

impl InputTable {
    /// Load and validate a CSV file from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => CliError::FileNotFound(path.display().to_string()),
            _ => CliError::Io(e),
        })?;

        debug!(path = %path.display(), "Loading input file");
        Self::from_reader(file)
    }

    /// Parse and validate CSV text from any reader
    ///
    /// Fails with [`CliError::MissingColumn`] when no header is exactly
    /// [`EIN_COLUMN`]. Rows may be shorter than the header; a missing cell
    /// reads as an empty identifier.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers: Vec<String> = rdr
            .headers()?
            .iter()
            .enumerate()
            .map(|(idx, h)| {
                if idx == 0 {
                    h.strip_prefix(UTF8_BOM).unwrap_or(h).to_string()
                } else {
                    h.to_string()
                }
            })
            .collect();

        let ein_index = headers
            .iter()
            .position(|h| h == EIN_COLUMN)
            .ok_or_else(|| CliError::missing_column(EIN_COLUMN, &headers))?;

        let records = rdr.records().collect::<std::result::Result<Vec<_>, _>>()?;

        debug!(rows = records.len(), columns = headers.len(), "Parsed input table");

        Ok(Self {
            headers,
            records,
            ein_index,
        })
    }

    /// Column names in file order
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Number of data rows
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Identifier of every row, in file order
    pub fn identifiers(&self) -> impl Iterator<Item = &str> + '_ {
        self.records
            .iter()
            .map(move |record| record.get(self.ein_index).unwrap_or(""))
    }
}
