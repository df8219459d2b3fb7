//! HTTP client for the Candid API

use crate::api::{endpoints, types::PremierResponse};
use crate::config::Config;
use crate::error::Result;
use crate::fetch::{FetchError, FetchOutcome};
use candid_common::types::OrganizationSummary;
use reqwest::header::ACCEPT;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

/// Header carrying the subscription key
pub const SUBSCRIPTION_KEY_HEADER: &str = "Subscription-Key";

/// API client for the Candid organization endpoint
pub struct CandidClient {
    client: Client,
    base_url: String,
}

impl CandidClient {
    /// Create a new client
    ///
    /// Without a `timeout` the reqwest default applies (no overall timeout).
    pub fn new(base_url: String, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder().user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));

        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url,
        })
    }

    /// Create from CLI configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.api_url.clone(), config.timeout)
    }

    /// Fetch and flatten one organization record
    ///
    /// Never fails: HTTP errors, transport errors and malformed bodies are
    /// logged and returned as [`FetchOutcome::Failure`].
    pub async fn fetch_organization(&self, ein: &str, api_key: &str) -> FetchOutcome {
        match self.try_fetch(ein, api_key).await {
            Ok(summary) => FetchOutcome::Success(summary),
            Err(error) => {
                warn!(ein = %ein, error = %error, "Error fetching data for EIN");
                FetchOutcome::Failure {
                    ein: ein.to_string(),
                    error,
                }
            }
        }
    }

    async fn try_fetch(
        &self,
        ein: &str,
        api_key: &str,
    ) -> std::result::Result<OrganizationSummary, FetchError> {
        let url = endpoints::organization_url(&self.base_url, ein);
        debug!(ein = %ein, url = %url, "Requesting organization");

        let response = self
            .client
            .get(&url)
            .header(ACCEPT, "application/json")
            .header(SUBSCRIPTION_KEY_HEADER, api_key)
            .send()
            .await
            .map_err(FetchError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status { status });
        }

        let body = response.bytes().await.map_err(FetchError::Transport)?;
        let parsed: PremierResponse = serde_json::from_slice(&body)
            .map_err(|e| FetchError::MalformedResponse(e.to_string()))?;

        Ok(parsed.data.to_summary())
    }
}
