//! API response types
//!
//! Only the parts of the Premier v3 payload that feed the flattened record
//! are modelled. Each section is kept as a loose JSON object because the
//! API omits fields freely; the sections themselves are required, so a body
//! missing one fails to deserialize and is reported like any other failed
//! fetch.

use candid_common::types::{OrganizationSummary, NOT_AVAILABLE};
use serde::Deserialize;
use serde_json::{Map, Value};

/// A loosely typed section of the response
pub type Section = Map<String, Value>;

/// Top-level response wrapper
#[derive(Debug, Clone, Deserialize)]
pub struct PremierResponse {
    pub data: PremierData,
}

/// The `data` object
#[derive(Debug, Clone, Deserialize)]
pub struct PremierData {
    pub summary: Section,
    pub operations: Section,
    pub financials: Financials,
}

/// The `data.financials` object
#[derive(Debug, Clone, Deserialize)]
pub struct Financials {
    pub most_recent_year_financials: Section,
}

impl PremierData {
    /// Flatten the response into the exported record
    pub fn to_summary(&self) -> OrganizationSummary {
        let summary = &self.summary;
        let operations = &self.operations;
        let financials = &self.financials.most_recent_year_financials;

        OrganizationSummary {
            organization_name: field(summary, "organization_name"),
            ein: field(summary, "ein"),
            address: format!(
                "{}, {}, {} {}",
                field(summary, "address_line_1"),
                field(summary, "city"),
                field(summary, "state"),
                field(summary, "zip"),
            ),
            website: field(summary, "website_url"),
            demographics_status: field(summary, "demographics_status"),
            no_of_employees: field(operations, "no_of_employees"),
            no_of_volunteers: field(operations, "no_of_volunteers"),
            year_founded: field(summary, "year_founded"),
            total_revenue: field(financials, "total_revenue"),
            total_expenses: field(financials, "expenses_total"),
            total_assets: field(financials, "assets_total"),
        }
    }
}

/// Render `section[key]`, or [`NOT_AVAILABLE`] when it is absent or null
pub fn field(section: &Section, key: &str) -> String {
    match section.get(key) {
        None | Some(Value::Null) => NOT_AVAILABLE.to_string(),
        Some(value) => value_to_string(value),
    }
}

/// Convert a JSON value to its cell text
fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full_response() -> serde_json::Value {
        json!({
            "code": 200,
            "message": "Request was processed successfully!",
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
                "operations": {
                    "no_of_employees": 12,
                    "no_of_volunteers": 40
                },
                "financials": {
                    "most_recent_year_financials": {
                        "total_revenue": 1500000,
                        "expenses_total": 1200000.5,
                        "assets_total": 3000000
                    }
                }
            }
        })
    }

    #[test]
    fn test_full_response_flattens() {
        let response: PremierResponse = serde_json::from_value(full_response()).unwrap();
        let summary = response.data.to_summary();

        assert_eq!(summary.organization_name, "Helping Hands Foundation");
        assert_eq!(summary.ein, "12-3456789");
        assert_eq!(summary.address, "1 Main St, Springfield, IL 62701");
        assert_eq!(summary.website, "https://helpinghands.org");
        assert_eq!(summary.demographics_status, "Demographics via Candid");
        assert_eq!(summary.no_of_employees, "12");
        assert_eq!(summary.no_of_volunteers, "40");
        assert_eq!(summary.year_founded, "1987");
        assert_eq!(summary.total_revenue, "1500000");
        assert_eq!(summary.total_expenses, "1200000.5");
        assert_eq!(summary.total_assets, "3000000");
    }

    #[test]
    fn test_missing_fields_become_not_available() {
        let response: PremierResponse = serde_json::from_value(json!({
            "data": {
                "summary": { "organization_name": "Sparse Org", "city": "Duluth", "website_url": null },
                "operations": {},
                "financials": { "most_recent_year_financials": {} }
            }
        }))
        .unwrap();
        let summary = response.data.to_summary();

        assert_eq!(summary.organization_name, "Sparse Org");
        assert_eq!(summary.ein, NOT_AVAILABLE);
        assert_eq!(summary.address, "N/A, Duluth, N/A N/A");
        assert_eq!(summary.website, NOT_AVAILABLE);
        assert_eq!(summary.no_of_employees, NOT_AVAILABLE);
        assert_eq!(summary.total_assets, NOT_AVAILABLE);
    }

    #[test]
    fn test_missing_section_fails_to_parse() {
        let missing_financials = json!({
            "data": { "summary": {}, "operations": {} }
        });
        assert!(serde_json::from_value::<PremierResponse>(missing_financials).is_err());

        let null_year = json!({
            "data": {
                "summary": {},
                "operations": {},
                "financials": { "most_recent_year_financials": null }
            }
        });
        assert!(serde_json::from_value::<PremierResponse>(null_year).is_err());
    }

    #[test]
    fn test_value_to_string() {
        assert_eq!(value_to_string(&json!("text")), "text");
        assert_eq!(value_to_string(&json!(42)), "42");
        assert_eq!(value_to_string(&json!(true)), "true");
        assert_eq!(value_to_string(&json!(["a", "b"])), "[\"a\",\"b\"]");
    }
}
