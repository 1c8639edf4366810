//! baidu-search: Baidu web search scraper exposed as an agent tool.
//!
//! Fetches and parses Baidu search result pages, returning a normalized
//! list of ranked results (title, abstract, URL) for a query. Pure static
//! HTML parsing: no JavaScript rendering, no caching, no retries.
//!
//! Layered leaves-first:
//!
//! - [`normalize`]: text cleaning and URL resolution helpers.
//! - [`extract`]: pure HTML-to-records extraction for one result page.
//! - [`client`]: HTTP transport and the pagination loop, with sync and
//!   async entry points.
//! - [`tool`]: typed invocation surface for agent frameworks.

pub mod client;
pub mod config;
pub mod error;
pub mod extract;
pub mod normalize;
pub mod tool;
pub mod types;

// Re-export core types for convenient access
pub use client::SearchClient;
pub use config::SearchConfig;
pub use error::{Result, SearchError};
pub use tool::{SearchArgs, SearchTool};
pub use types::{SearchResponse, SearchResult};
