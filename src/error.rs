//! Centralized error types for the baidu-search crate.
//!
//! All fallible operations return [`SearchError`] through the crate-wide
//! [`Result`] alias. The variants map onto the three failure classes the
//! crate distinguishes:
//!
//! - `InvalidArgument`: bad caller input (empty query, out-of-range
//!   configuration). Fails fast, no network call is made.
//! - `Transport` / `HttpStatus`: the HTTP request could not complete or the
//!   provider answered with a non-success status. The whole operation
//!   aborts; pagination cannot continue without the prior page's body.
//! - `NoResults`: raised by the tool adapter only. The search client itself
//!   treats an empty result set as a normal, successful response.

use thiserror::Error;

/// Result type alias using [`SearchError`].
pub type Result<T> = std::result::Result<T, SearchError>;

/// Errors surfaced by the search client and the tool adapter.
#[derive(Debug, Error)]
pub enum SearchError {
    /// A caller-supplied argument or configuration value is invalid.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The HTTP request failed (connection error, timeout, body read).
    #[error("search request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The provider answered with a non-success HTTP status.
    #[error("search request to {url} returned status {status}")]
    HttpStatus {
        /// HTTP status code of the response.
        status: u16,
        /// The page URL that was being fetched.
        url: String,
    },

    /// The query completed but produced zero results.
    ///
    /// Only the tool adapter raises this; see [`crate::tool::SearchTool`].
    #[error("no results returned for this query")]
    NoResults,

    /// The worker task running the blocking search loop failed.
    #[error("search worker failed: {0}")]
    Worker(#[from] tokio::task::JoinError),
}

impl SearchError {
    /// Creates an invalid-argument error from any message.
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Returns `true` if this error came from the HTTP transport layer.
    ///
    /// Lets callers distinguish "the provider was unreachable" from
    /// "the call itself was malformed" when deciding whether to retry.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::HttpStatus { .. })
    }

    /// Returns `true` if this error indicates bad caller input.
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}
