//! Async arXiv API client.
//!
//! Thin transport layer over the pure core: compiles the query, performs
//! one GET with retry middleware, and hands the body to the feed
//! normalizer. A fetch either completes and is normalized in full or is
//! discarded entirely on error; no partial results are committed.

use reqwest::Client;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{RetryTransientMiddleware, policies::ExponentialBackoff};

use crate::config::{Config, api};
use crate::error::{ClientError, ClientResult};
use crate::feed;
use crate::models::{Paper, SearchFilters};
use crate::query;

/// arXiv query API client.
#[derive(Clone)]
pub struct ArxivClient {
    /// HTTP client with retry middleware.
    client: ClientWithMiddleware,

    /// Query API endpoint.
    api_url: String,
}

impl ArxivClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .gzip(true)
            .build()?;

        let retry_policy = ExponentialBackoff::builder()
            .retry_bounds(api::RETRY_MIN_BACKOFF, api::RETRY_MAX_BACKOFF)
            .build_with_max_retries(config.max_retries);

        let client = ClientBuilder::new(client)
            .with(RetryTransientMiddleware::new_with_policy(retry_policy))
            .build();

        Ok(Self { client, api_url: config.api_url })
    }

    /// Fetch and normalize one page of search results.
    ///
    /// `page` is zero-based; the compiled request asks for
    /// [`api::PAGE_SIZE`] entries starting at `page * PAGE_SIZE`.
    ///
    /// # Errors
    ///
    /// [`ClientError::Status`] on a non-success response,
    /// [`ClientError::Feed`] when the body cannot be normalized, transport
    /// variants otherwise.
    pub async fn search(
        &self,
        free_text: &str,
        filters: &SearchFilters,
        page: usize,
    ) -> ClientResult<Vec<Paper>> {
        let compiled = query::compile(free_text, filters, page);
        tracing::debug!(
            search_query = %compiled.search_query,
            start = compiled.start,
            "querying catalog"
        );

        let response =
            self.client.get(&self.api_url).query(&compiled.params()).send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "catalog request failed");
            return Err(ClientError::status(status.as_u16(), message));
        }

        let body = response.text().await?;
        let papers = feed::parse_feed(&body)?;
        tracing::debug!(count = papers.len(), "normalized catalog response");
        Ok(papers)
    }
}

impl std::fmt::Debug for ArxivClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArxivClient").field("api_url", &self.api_url).finish()
    }
}
