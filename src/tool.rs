//! Tool adapter exposing the search client to agent frameworks.
//!
//! The adapter owns the invocation policy the core client deliberately
//! does not have: it validates the typed argument schema and converts an
//! empty result set into a catchable [`SearchError::NoResults`], so a host
//! framework can distinguish "zero results" from a transport error.

use serde::Deserialize;

use crate::client::SearchClient;
use crate::config::SearchConfig;
use crate::error::{Result, SearchError};
use crate::types::{SearchResponse, SearchResult};

/// Tool name for registration with a host framework.
pub const TOOL_NAME: &str = "baidu_search";

/// Tool description for registration with a host framework.
pub const TOOL_DESCRIPTION: &str = "Use Baidu to search Chinese-language web content. \
     Useful for discovering up-to-date information and references in the Chinese web.";

/// Largest per-invocation result count the tool accepts.
pub const MAX_NUM_RESULTS: usize = 20;

/// Typed invocation arguments for the tool.
///
/// Unknown fields are rejected so schema drift in a caller surfaces as a
/// deserialization error instead of being silently ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SearchArgs {
    /// A natural language query to send to Baidu search.
    pub query: String,
    /// Maximum number of results for this invocation, in `1..=20`. Falls
    /// back to the configured `max_results` when omitted.
    #[serde(default)]
    pub num_results: Option<usize>,
}

/// Agent-facing Baidu search tool.
pub struct SearchTool {
    client: SearchClient,
}

impl SearchTool {
    /// Creates a tool with its own client built from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidArgument`] for out-of-range
    /// configuration, [`SearchError::Transport`] if the HTTP client cannot
    /// be built.
    pub fn new(config: SearchConfig) -> Result<Self> {
        Ok(Self {
            client: SearchClient::new(config)?,
        })
    }

    /// Wraps an existing client.
    #[must_use]
    pub fn with_client(client: SearchClient) -> Self {
        Self { client }
    }

    /// Runs one search invocation, blocking the calling thread.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidArgument`] for an empty query or an
    /// out-of-range `num_results`, [`SearchError::NoResults`] when the
    /// query succeeded but produced nothing, and transport errors as-is.
    pub fn run(&self, args: &SearchArgs) -> Result<SearchResponse> {
        validate_args(args)?;
        let response = self.client.search(&args.query, args.num_results)?;
        if response.results.is_empty() {
            return Err(SearchError::NoResults);
        }
        Ok(response)
    }

    /// Async variant of [`run`](Self::run) with an identical contract.
    ///
    /// # Errors
    ///
    /// Same as [`run`](Self::run), plus [`SearchError::Worker`] if the
    /// blocking worker task fails.
    pub async fn run_async(&self, args: &SearchArgs) -> Result<SearchResponse> {
        validate_args(args)?;
        let response = self
            .client
            .search_async(&args.query, args.num_results)
            .await?;
        if response.results.is_empty() {
            return Err(SearchError::NoResults);
        }
        Ok(response)
    }

    /// Formats search results as a numbered markdown list.
    #[must_use]
    pub fn render_markdown(results: &[SearchResult]) -> String {
        if results.is_empty() {
            return "No results found.".to_string();
        }

        let mut markdown = format!("## Search Results ({} found)\n\n", results.len());
        for result in results {
            markdown.push_str(&format!("### {}. {}\n", result.rank, result.title));
            markdown.push_str(&format!("**URL**: {}\n\n", result.url));
            if !result.abstract_text.is_empty() {
                markdown.push_str(&format!("{}\n\n", result.abstract_text));
            }
        }
        markdown
    }
}

fn validate_args(args: &SearchArgs) -> Result<()> {
    if args.query.is_empty() {
        return Err(SearchError::invalid_argument(
            "query must be a non-empty string",
        ));
    }
    if let Some(n) = args.num_results {
        if !(1..=MAX_NUM_RESULTS).contains(&n) {
            return Err(SearchError::invalid_argument(format!(
                "num_results must be between 1 and {MAX_NUM_RESULTS}, got {n}"
            )));
        }
    }
    Ok(())
}
