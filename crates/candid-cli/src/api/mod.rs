//! Candid API client module
//!
//! HTTP client for the Candid Premier v3 organization endpoint.

pub mod client;
pub mod endpoints;
pub mod types;

pub use client::CandidClient;
pub use types::*;
