//! `candid config` command implementation
//!
//! Shows the effective configuration.

use crate::config::{Config, API_KEY_ENV, API_TIMEOUT_ENV, API_URL_ENV};
use crate::error::Result;
use colored::Colorize;

/// Show all configuration
pub async fn show(config: &Config) -> Result<()> {
    let timeout = config
        .timeout
        .map(|t| format!("{}s", t.as_secs()))
        .unwrap_or_else(|| "client default".to_string());

    println!("{}", "Candid CLI Configuration:".cyan().bold());
    println!();
    println!("{:<10} {}", "api_url:", config.api_url());
    println!("{:<10} {}", "api_key:", config.masked_api_key());
    println!("{:<10} {}", "timeout:", timeout);
    println!();
    println!("{}", "Environment Variables:".cyan());
    println!("  {:<24} - API base URL", API_URL_ENV);
    println!("  {:<24} - Subscription key", API_KEY_ENV);
    println!("  {:<24} - Request timeout in seconds", API_TIMEOUT_ENV);

    Ok(())
}
