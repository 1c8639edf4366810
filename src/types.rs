//! Core result types returned by a search.

use serde::{Deserialize, Serialize};

/// A single ranked search result.
///
/// Immutable once produced. Serializes with the JSON field names
/// `title` / `abstract` / `url` / `rank`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// The result title, cleaned of control characters and extra whitespace.
    pub title: String,
    /// The result abstract, cleaned and truncated to the configured maximum
    /// length (a trailing `…` marks truncation).
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    /// Absolute URL of the result (empty if the card carried no link).
    pub url: String,
    /// 1-based position within the full result set for this query, stable
    /// across page boundaries.
    pub rank: usize,
}

/// The full response for one search invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    /// The query that was searched.
    pub query: String,
    /// Results in rank order; ranks are exactly `1..=results.len()`.
    pub results: Vec<SearchResult>,
    /// Wall-clock seconds for the whole operation, rounded to milliseconds.
    /// `0.0` when no network call was made.
    pub response_time: f64,
}
