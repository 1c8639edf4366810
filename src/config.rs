//! Configuration for the search client.
//!
//! A [`SearchConfig`] is validated once when a client is constructed and is
//! immutable afterwards; every search made through that client reads the
//! same configuration.

use std::time::Duration;

use crate::error::{Result, SearchError};

/// Default Baidu host, used to resolve root-relative result URLs.
pub const BAIDU_HOST_URL: &str = "https://www.baidu.com";

/// Default maximum number of results per search.
pub const DEFAULT_MAX_RESULTS: usize = 5;

/// Default maximum characters kept per result abstract.
pub const DEFAULT_ABSTRACT_MAX_LENGTH: usize = 300;

/// Default HTTP timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Browser-like headers Baidu expects before serving the desktop markup.
///
/// Without a plausible `User-Agent` and `Referer` the provider tends to
/// answer with an interstitial page that contains no result container.
#[must_use]
pub fn default_headers() -> Vec<(String, String)> {
    [
        (
            "Accept",
            "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,image/apng,*/*;q=0.8",
        ),
        (
            "User-Agent",
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
             (KHTML, like Gecko) Chrome/68.0.3440.106 Safari/537.36",
        ),
        ("Referer", "https://www.baidu.com/"),
        ("Accept-Encoding", "gzip, deflate"),
        ("Accept-Language", "zh-CN,zh;q=0.9"),
    ]
    .into_iter()
    .map(|(name, value)| (name.to_string(), value.to_string()))
    .collect()
}

/// Configuration for a [`crate::client::SearchClient`].
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Maximum number of results returned when the caller does not ask for
    /// a specific count. Must be at least 1.
    pub max_results: usize,
    /// Maximum characters kept per result abstract before truncation.
    /// Must be at least 50.
    pub abstract_max_length: usize,
    /// Timeout applied to each HTTP request. Must be at least 1 second.
    pub timeout: Duration,
    /// Headers attached to every request, in insertion order.
    pub headers: Vec<(String, String)>,
    /// Host used to resolve root-relative URLs found in the markup.
    pub host_url: String,
    /// Search URL prefix; the percent-encoded query is appended to it.
    pub search_url: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_results: DEFAULT_MAX_RESULTS,
            abstract_max_length: DEFAULT_ABSTRACT_MAX_LENGTH,
            timeout: DEFAULT_TIMEOUT,
            headers: default_headers(),
            host_url: BAIDU_HOST_URL.to_string(),
            search_url: format!("{BAIDU_HOST_URL}/s?ie=utf-8&tn=baidu&wd="),
        }
    }
}

impl SearchConfig {
    /// Checks the configuration bounds.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidArgument`] if `max_results` is zero,
    /// `abstract_max_length` is below 50, or `timeout` is below one second.
    pub fn validate(&self) -> Result<()> {
        if self.max_results < 1 {
            return Err(SearchError::invalid_argument(
                "max_results must be at least 1",
            ));
        }
        if self.abstract_max_length < 50 {
            return Err(SearchError::invalid_argument(
                "abstract_max_length must be at least 50",
            ));
        }
        if self.timeout < Duration::from_secs(1) {
            return Err(SearchError::invalid_argument(
                "timeout must be at least 1 second",
            ));
        }
        Ok(())
    }
}
