use crate::utils::error::Result;
use crate::utils::validation::validate_url;
use reqwest::Client;

pub const DEFAULT_URL: &str = "http://example.com";

/// Issues one GET request and returns the whole response body as text.
pub async fn fetch_text(client: &Client, url: &str) -> Result<String> {
    validate_url("url", url)?;

    tracing::debug!("Making HTTP request to: {}", url);
    let response = client.get(url).send().await?;

    tracing::debug!("Response status: {}", response.status());
    let body = response.text().await?;

    Ok(body)
}
