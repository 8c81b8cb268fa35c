//! Configuration for the arXiv Explorer client.

use std::time::Duration;

/// API configuration constants.
pub mod api {
    use std::time::Duration;

    /// Base URL for the arXiv query API.
    pub const BASE_URL: &str = "https://export.arxiv.org/api/query";

    /// Results fetched per page.
    pub const PAGE_SIZE: usize = 10;

    /// Earliest submission date accepted by the catalog (arXiv opened in 1991).
    pub const EARLIEST_SUBMITTED: &str = "19910101";

    /// Far-future sentinel for an open-ended date range.
    pub const LATEST_SUBMITTED: &str = "99991231";

    /// Request timeout.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    /// Connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Maximum transient-error retries.
    pub const MAX_RETRIES: u32 = 3;

    /// Minimum retry backoff.
    pub const RETRY_MIN_BACKOFF: Duration = Duration::from_secs(1);

    /// Maximum retry backoff.
    pub const RETRY_MAX_BACKOFF: Duration = Duration::from_secs(30);
}

/// Scoring weights for relevance ranking and related-paper similarity.
pub mod weights {
    /// Weight for a verbatim token match, multiplied by term frequency.
    pub const EXACT_MATCH: f64 = 2.0;

    /// Weight per partial (substring either way) token match.
    pub const PARTIAL_MATCH: f64 = 1.0;

    /// Bonus when the raw title contains the query token.
    pub const TITLE_BOOST: f64 = 1.5;

    /// Bonus when any category code contains the query token.
    pub const CATEGORY_BOOST: f64 = 1.2;

    /// How many related papers the consumer shows.
    pub const RELATED_LIMIT: usize = 5;
}

/// Client configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Query API endpoint (overridable for mock servers).
    pub api_url: String,

    /// Request timeout.
    pub request_timeout: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,

    /// Maximum transient-error retries.
    pub max_retries: u32,
}

impl Config {
    /// Create a configuration pointing at the public arXiv API.
    #[must_use]
    pub fn new() -> Self {
        Self {
            api_url: api::BASE_URL.to_string(),
            request_timeout: api::REQUEST_TIMEOUT,
            connect_timeout: api::CONNECT_TIMEOUT,
            max_retries: api::MAX_RETRIES,
        }
    }

    /// Create a test configuration with a custom URL for mock servers.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            api_url: base_url.to_string(),
            request_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
            max_retries: 0, // No retry backoff in tests
        }
    }

    /// Create configuration from environment variables.
    ///
    /// `ARXIV_API_URL` overrides the endpoint; everything else keeps its
    /// default.
    ///
    /// # Errors
    ///
    /// Returns error if environment variables are invalid.
    pub fn from_env() -> anyhow::Result<Self> {
        let mut config = Self::new();
        if let Ok(url) = std::env::var("ARXIV_API_URL") {
            url::Url::parse(&url)?;
            config.api_url = url;
        }
        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
