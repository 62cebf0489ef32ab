use std::time::Duration;

use perto_core::SourceDescriptor;
use reqwest::Client;

use crate::error::CatalogError;
use crate::retry::retry_with_backoff;
use crate::types::RawPlace;

/// HTTP client for the category JSON sources.
///
/// Treats not-found (404) and other non-2xx responses as typed errors.
/// Transient errors (network failures, 5xx) are automatically retried with
/// exponential backoff up to `max_retries` additional attempts; 404 and
/// parse errors are not retried.
pub struct CatalogClient {
    client: Client,
    /// Maximum number of retry attempts after the first failure.
    max_retries: u32,
    /// Base delay in seconds for exponential backoff: `backoff_base_secs * 2^attempt`.
    backoff_base_secs: u64,
}

impl CatalogClient {
    /// Creates a `CatalogClient` with configured timeout, `User-Agent`, and retry policy.
    ///
    /// `max_retries` is the number of additional attempts after the first failure for
    /// retriable errors. Set to `0` to disable retries.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(
        timeout_secs: u64,
        user_agent: &str,
        max_retries: u32,
        backoff_base_secs: u64,
    ) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            max_retries,
            backoff_base_secs,
        })
    }

    /// Fetches one category source and decodes it as a list of raw place
    /// records, with automatic retry on transient errors.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::NotFound`] — HTTP 404 (not retried).
    /// - [`CatalogError::UnexpectedStatus`] — any other non-2xx status
    ///   (5xx retried, the rest not).
    /// - [`CatalogError::Http`] — network or TLS failure after all retries exhausted.
    /// - [`CatalogError::Deserialize`] — response body is not a JSON list of
    ///   place-shaped records (not retried).
    pub async fn fetch_source(
        &self,
        base_url: &str,
        descriptor: &SourceDescriptor,
    ) -> Result<Vec<RawPlace>, CatalogError> {
        let url = source_url(base_url, &descriptor.path);
        let category = descriptor.category;

        retry_with_backoff(self.max_retries, self.backoff_base_secs, || {
            let url = url.clone();
            async move {
                let response = self.client.get(&url).send().await?;
                let status = response.status();

                if status == reqwest::StatusCode::NOT_FOUND {
                    return Err(CatalogError::NotFound { url });
                }

                if !status.is_success() {
                    return Err(CatalogError::UnexpectedStatus {
                        status: status.as_u16(),
                        url,
                    });
                }

                let body = response.text().await?;
                serde_json::from_str::<Vec<RawPlace>>(&body).map_err(|e| {
                    CatalogError::Deserialize {
                        context: format!("source '{category}' from {url}"),
                        source: e,
                    }
                })
            }
        })
        .await
    }
}

/// Joins the configured base URL and a source path without doubling slashes.
fn source_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_url_joins_cleanly() {
        assert_eq!(
            source_url("https://data.example.com/data", "pets.json"),
            "https://data.example.com/data/pets.json"
        );
        assert_eq!(
            source_url("https://data.example.com/data/", "/pets.json"),
            "https://data.example.com/data/pets.json"
        );
    }
}
