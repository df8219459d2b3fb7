//! Common types used across the workspace

use crate::error::{CommonError, Result};

/// Placeholder for a field the API response did not include.
pub const NOT_AVAILABLE: &str = "N/A";

/// Placeholder written to every field of a record whose fetch failed.
pub const ERROR_SENTINEL: &str = "Error";

/// Output columns, in export order.
pub const COLUMNS: [&str; 11] = [
    "organization_name",
    "ein",
    "address",
    "website",
    "demographics_status",
    "no_of_employees",
    "no_of_volunteers",
    "year_founded",
    "total_revenue",
    "total_expenses",
    "total_assets",
];

/// Flattened view of one organization record.
///
/// Field names match the exported column names. Every value is already
/// rendered as text: either the field from the API response, [`NOT_AVAILABLE`]
/// when the response omitted it, or [`ERROR_SENTINEL`] for a failed fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrganizationSummary {
    pub organization_name: String,
    pub ein: String,
    pub address: String,
    pub website: String,
    pub demographics_status: String,
    pub no_of_employees: String,
    pub no_of_volunteers: String,
    pub year_founded: String,
    pub total_revenue: String,
    pub total_expenses: String,
    pub total_assets: String,
}

impl OrganizationSummary {
    /// Row substituted for an identifier whose fetch failed.
    ///
    /// Every field is [`ERROR_SENTINEL`] except `ein`, which keeps the input
    /// value so the row can be traced back to the input file.
    pub fn error_row(ein: impl Into<String>) -> Self {
        let error = || ERROR_SENTINEL.to_string();
        Self {
            organization_name: error(),
            ein: ein.into(),
            address: error(),
            website: error(),
            demographics_status: error(),
            no_of_employees: error(),
            no_of_volunteers: error(),
            year_founded: error(),
            total_revenue: error(),
            total_expenses: error(),
            total_assets: error(),
        }
    }

    /// Field values in [`COLUMNS`] order
    pub fn fields(&self) -> [&str; 11] {
        [
            self.organization_name.as_str(),
            self.ein.as_str(),
            self.address.as_str(),
            self.website.as_str(),
            self.demographics_status.as_str(),
            self.no_of_employees.as_str(),
            self.no_of_volunteers.as_str(),
            self.year_founded.as_str(),
            self.total_revenue.as_str(),
            self.total_expenses.as_str(),
            self.total_assets.as_str(),
        ]
    }

    /// Rebuild a summary from values in [`COLUMNS`] order
    pub fn from_fields<I, S>(values: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values: Vec<String> = values.into_iter().map(Into::into).collect();
        let actual = values.len();
        let values: [String; 11] = values.try_into().map_err(|_| CommonError::FieldCount {
            expected: COLUMNS.len(),
            actual,
        })?;
        let [
            organization_name,
            ein,
            address,
            website,
            demographics_status,
            no_of_employees,
            no_of_volunteers,
            year_founded,
            total_revenue,
            total_expenses,
            total_assets,
        ] = values;

        Ok(Self {
            organization_name,
            ein,
            address,
            website,
            demographics_status,
            no_of_employees,
            no_of_volunteers,
            year_founded,
            total_revenue,
            total_expenses,
            total_assets,
        })
    }
}
