//! HTTP transport and pagination loop for Baidu searches.
//!
//! [`SearchClient`] owns the reusable HTTP client plus the validated
//! configuration, and walks result pages until the requested number of
//! results is collected or the provider stops linking a next page. Pages
//! are fetched strictly sequentially: each page's URL comes from the
//! previous page's parsed next-page link.
//!
//! The core loop is synchronous. [`SearchClient::search_async`] runs the
//! same loop on a blocking worker task so callers on a cooperative
//! scheduler are never blocked; no parsing or pagination logic is
//! duplicated between the two entry points.
//!
//! # Examples
//!
//! ```no_run
//! use baidu_search::{SearchClient, SearchConfig};
//!
//! # fn example() -> baidu_search::Result<()> {
//! let client = SearchClient::new(SearchConfig::default())?;
//! let response = client.search("北京美食", Some(3))?;
//! for result in &response.results {
//!     println!("{}. {} {}", result.rank, result.title, result.url);
//! }
//! # Ok(())
//! # }
//! ```

use std::time::Instant;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use tracing::debug;

use crate::config::SearchConfig;
use crate::error::{Result, SearchError};
use crate::extract::Extractor;
use crate::types::{SearchResponse, SearchResult};

/// Client for scraping Baidu search result pages.
///
/// Cheap to clone: the underlying HTTP client is a shared connection-pool
/// handle, safe for concurrent use by multiple in-flight searches.
#[derive(Debug, Clone)]
pub struct SearchClient {
    config: SearchConfig,
    extractor: Extractor,
    http: reqwest::blocking::Client,
}

impl SearchClient {
    /// Creates a client, validating the configuration and building the
    /// HTTP client once with the configured headers and timeout.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidArgument`] for out-of-range
    /// configuration values or malformed header names/values, and
    /// [`SearchError::Transport`] if the HTTP client cannot be built.
    pub fn new(config: SearchConfig) -> Result<Self> {
        config.validate()?;

        let mut headers = HeaderMap::new();
        for (name, value) in &config.headers {
            let name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
                SearchError::invalid_argument(format!("invalid header name {name:?}: {e}"))
            })?;
            let value = HeaderValue::from_str(value).map_err(|e| {
                SearchError::invalid_argument(format!("invalid header value for {name}: {e}"))
            })?;
            headers.insert(name, value);
        }

        let http = reqwest::blocking::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            extractor: Extractor::new(&config),
            config,
            http,
        })
    }

    /// Returns the configuration this client was built with.
    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Searches Baidu, blocking the calling thread for the full duration.
    ///
    /// `num_results` defaults to the configured `max_results` when `None`.
    /// `Some(0)` is a valid request and short-circuits to an empty response
    /// with `response_time == 0.0` without touching the network.
    ///
    /// Zero results is a successful outcome here, not an error; see
    /// [`crate::tool::SearchTool`] for the adapter that elevates it.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidArgument`] for an empty query and
    /// [`SearchError::Transport`] / [`SearchError::HttpStatus`] when a page
    /// fetch fails. A failed fetch aborts the whole operation: the
    /// next-page chain cannot continue without the prior page's body.
    pub fn search(&self, query: &str, num_results: Option<usize>) -> Result<SearchResponse> {
        if query.is_empty() {
            return Err(SearchError::invalid_argument(
                "query must be a non-empty string",
            ));
        }

        let wanted = num_results.unwrap_or(self.config.max_results);
        if wanted == 0 {
            return Ok(SearchResponse {
                query: query.to_string(),
                results: Vec::new(),
                response_time: 0.0,
            });
        }

        let start = Instant::now();
        let results = self.collect_pages(query, wanted)?;
        let response_time = round_to_millis(start.elapsed().as_secs_f64());

        Ok(SearchResponse {
            query: query.to_string(),
            results,
            response_time,
        })
    }

    /// Async variant of [`search`](Self::search) with an identical contract.
    ///
    /// The blocking fetch loop runs on a worker task via `spawn_blocking`,
    /// so many searches can run concurrently (one worker each) without
    /// serializing on a shared lock. Dropping the returned future does not
    /// abort the worker's in-flight HTTP request; cancellation is
    /// best-effort and bounded by the per-request timeout.
    ///
    /// # Errors
    ///
    /// Same as [`search`](Self::search), plus [`SearchError::Worker`] if
    /// the worker task panics or is cancelled.
    pub async fn search_async(
        &self,
        query: &str,
        num_results: Option<usize>,
    ) -> Result<SearchResponse> {
        let client = self.clone();
        let query = query.to_string();
        tokio::task::spawn_blocking(move || client.search(&query, num_results)).await?
    }

    /// Walks result pages until `wanted` results are collected or the
    /// provider stops linking a next page.
    fn collect_pages(&self, query: &str, wanted: usize) -> Result<Vec<SearchResult>> {
        let mut results: Vec<SearchResult> = Vec::new();
        let mut page_url = Some(self.initial_url(query));

        while results.len() < wanted {
            let Some(url) = page_url.take() else { break };
            debug!(url = %url, collected = results.len(), "fetching result page");

            let body = self.fetch_page(&url)?;
            let page = self.extractor.extract(&body, results.len());
            debug!(
                yielded = page.results.len(),
                has_next = page.next_page.is_some(),
                "parsed result page"
            );

            results.extend(page.results);
            page_url = page.next_page;
        }

        // The last page may carry more cards than were still needed.
        results.truncate(wanted);
        Ok(results)
    }

    fn initial_url(&self, query: &str) -> String {
        format!("{}{}", self.config.search_url, urlencoding::encode(query))
    }

    /// Fetches one page and returns its body decoded as UTF-8.
    ///
    /// Baidu serves UTF-8 but sometimes mis-declares the charset, so the
    /// declared encoding is ignored and the raw bytes are decoded lossily.
    fn fetch_page(&self, url: &str) -> Result<String> {
        let response = self.http.get(url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        let bytes = response.bytes()?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

/// Rounds a seconds value to millisecond precision.
fn round_to_millis(seconds: f64) -> f64 {
    (seconds * 1000.0).round() / 1000.0
}
