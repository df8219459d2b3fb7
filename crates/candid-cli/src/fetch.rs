//! Batch fetching
//!
//! One request per identifier, strictly sequential, in input order. A
//! failed record becomes a [`FetchOutcome::Failure`]; it never stops the
//! batch, so the outcome list always has one entry per input row.

use crate::api::CandidClient;
use candid_common::types::OrganizationSummary;
use reqwest::StatusCode;
use thiserror::Error;
use tracing::info;

/// Why a single record could not be fetched
#[derive(Error, Debug)]
pub enum FetchError {
    /// The API answered with a non-success status
    #[error("API returned HTTP {status}")]
    Status { status: StatusCode },

    /// The request never completed (DNS, connect, TLS, timeout, body read)
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// The body was not JSON or lacked an expected section
    #[error("unexpected response body: {0}")]
    MalformedResponse(String),
}

/// Result of fetching one identifier
#[derive(Debug)]
pub enum FetchOutcome {
    Success(OrganizationSummary),
    Failure { ein: String, error: FetchError },
}

impl FetchOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, FetchOutcome::Success(_))
    }

    /// Row to export: the extracted record, or the uniform error row
    pub fn to_summary(&self) -> OrganizationSummary {
        match self {
            FetchOutcome::Success(summary) => summary.clone(),
            FetchOutcome::Failure { ein, .. } => OrganizationSummary::error_row(ein.clone()),
        }
    }
}

/// Success and failure counts for a finished batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchStats {
    pub succeeded: usize,
    pub failed: usize,
}

impl BatchStats {
    pub fn from_outcomes(outcomes: &[FetchOutcome]) -> Self {
        let succeeded = outcomes.iter().filter(|o| o.is_success()).count();
        Self {
            succeeded,
            failed: outcomes.len() - succeeded,
        }
    }

    pub fn total(&self) -> usize {
        self.succeeded + self.failed
    }
}

/// Fetch every identifier in order
///
/// `on_outcome` is called after each request with the row index and its
/// outcome, which the CLI uses to drive the progress bar.
pub async fn fetch_all<'a, I, F>(
    client: &CandidClient,
    identifiers: I,
    api_key: &str,
    mut on_outcome: F,
) -> Vec<FetchOutcome>
where
    I: IntoIterator<Item = &'a str>,
    F: FnMut(usize, &FetchOutcome),
{
    let identifiers = identifiers.into_iter();
    let mut outcomes = Vec::with_capacity(identifiers.size_hint().0);

    for (idx, ein) in identifiers.enumerate() {
        let outcome = client.fetch_organization(ein, api_key).await;
        on_outcome(idx, &outcome);
        outcomes.push(outcome);
    }

    let stats = BatchStats::from_outcomes(&outcomes);
    info!(
        total = stats.total(),
        succeeded = stats.succeeded,
        failed = stats.failed,
        "Batch complete"
    );

    outcomes
}
