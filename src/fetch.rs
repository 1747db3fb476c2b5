//! Fetching the deck-builder page.
//!
//! One-shot GET with a configured client; retry policy is out of scope.

use reqwest::Client;
use std::time::Duration;
use thiserror::Error;

/// User-Agent string identifying this tool
const USER_AGENT: &str = concat!("deckpeek/", env!("CARGO_PKG_VERSION"));

/// Timeout for requests against the deck-builder site
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("failed to fetch URL: {0}")]
    Http(#[from] reqwest::Error),
}

/// Fetch a page and return its body as text.
///
/// An empty body is not an error here; the summariser is total over
/// any input, including nothing at all.
pub async fn fetch_page(url: &str) -> Result<String, FetchError> {
    let client = create_client()?;
    tracing::debug!(url, "fetching deck builder page");
    let response = client.get(url).send().await?;
    let body = response.text().await?;
    tracing::debug!(bytes = body.len(), "fetched page body");
    Ok(body)
}

/// Create a configured HTTP client
fn create_client() -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(REQUEST_TIMEOUT)
        .build()
}
