//! HTTP client construction.

use reqwest::Client;

use crate::error::{Error, Result};

/// Build the HTTP client shared by feed fetching and transfers.
///
/// No request timeout is set: a stalled transfer stalls the run.
pub fn build_client(user_agent: &str) -> Result<Client> {
    Client::builder()
        .user_agent(user_agent)
        .build()
        .map_err(|e| Error::Config(format!("Failed to create HTTP client: {}", e)))
}
