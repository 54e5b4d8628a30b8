//! HTTP-backed document source.

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use super::{DocumentSource, Result, SourceError};

/// Fetches documents over HTTP from a fixed origin.
///
/// Any non-success status is reported as [`SourceError::NotFound`];
/// transport errors become [`SourceError::Fetch`]. No retries are
/// performed - a failed fetch is only re-attempted by a new caller
/// action.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
    /// Origin the relative document paths resolve against.
    base_url: String,
}

impl HttpSource {
    /// Create a source fetching from the given base URL.
    ///
    /// The base URL should name the site origin or a directory under
    /// it, e.g. `https://freeskillz.example.com`.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Create a source with a preconfigured HTTP client.
    #[must_use]
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    /// Get the base URL documents are fetched from.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[async_trait]
impl DocumentSource for HttpSource {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn fetch(&self, path: &str) -> Result<Vec<u8>> {
        let url = self.url_for(path);
        debug!(%url, "Fetching document over HTTP");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| SourceError::Fetch {
                path: path.to_string(),
                message: e.to_string(),
            })?;

        if !response.status().is_success() {
            return Err(SourceError::NotFound {
                path: path.to_string(),
            });
        }

        let bytes = response.bytes().await.map_err(|e| SourceError::Fetch {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        Ok(bytes.to_vec())
    }
}
