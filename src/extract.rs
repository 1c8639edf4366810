//! Pure HTML-to-records extraction for one Baidu result page.
//!
//! The extractor performs no I/O: it takes one page's markup plus a rank
//! offset and returns the result cards visible on that page together with
//! the next-page URL, if any. Parsing is deliberately permissive: Baidu's
//! markup drifts, and a malformed card must degrade to empty fields rather
//! than abort the page.

use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use tracing::trace;

use crate::config::SearchConfig;
use crate::normalize::{clean_text, normalize_url, truncate_abstract};
use crate::types::SearchResult;

/// Visible label of the provider's next-page navigation link.
const NEXT_PAGE_LABEL: &str = "下一页";

/// Class marking one organic result card inside the container.
const RESULT_CARD_CLASS: &str = "c-container";

static CONTAINER: Lazy<Selector> =
    Lazy::new(|| Selector::parse("#content_left").expect("container selector is valid"));
static TITLE: Lazy<Selector> =
    Lazy::new(|| Selector::parse("h3").expect("title selector is valid"));
static LINK: Lazy<Selector> = Lazy::new(|| Selector::parse("a").expect("link selector is valid"));
static NAV_LINK: Lazy<Selector> =
    Lazy::new(|| Selector::parse("a.n").expect("nav selector is valid"));

/// Abstract lookup strategies, evaluated in priority order: the dedicated
/// abstract block first, then any `div` as a fallback for cards that ship
/// without the class marker.
static ABSTRACT_CHAIN: Lazy<Vec<Selector>> = Lazy::new(|| {
    ["div.c-abstract", "div"]
        .iter()
        .map(|s| Selector::parse(s).expect("abstract selector is valid"))
        .collect()
});

/// Records and pagination state extracted from one page.
#[derive(Debug, Clone)]
pub struct ExtractedPage {
    /// Result cards in document order, ranks already assigned.
    pub results: Vec<SearchResult>,
    /// Absolute URL of the next result page, when the page links one.
    pub next_page: Option<String>,
}

/// Parses Baidu result pages into [`SearchResult`] records.
#[derive(Debug, Clone)]
pub struct Extractor {
    host_url: String,
    abstract_max_length: usize,
}

impl Extractor {
    /// Creates an extractor bound to the config's host and abstract limit.
    #[must_use]
    pub fn new(config: &SearchConfig) -> Self {
        Self {
            host_url: config.host_url.clone(),
            abstract_max_length: config.abstract_max_length,
        }
    }

    /// Extracts all result cards and the next-page link from one page.
    ///
    /// `rank_start` is the number of results already collected on earlier
    /// pages; ranks on this page continue from it. A page without the
    /// results container yields an empty record list and no next page;
    /// that is the normal end of pagination (zero-result and interstitial
    /// pages have no container), not an error.
    #[must_use]
    pub fn extract(&self, html: &str, rank_start: usize) -> ExtractedPage {
        let document = Html::parse_document(html);

        let Some(container) = document.select(&CONTAINER).next() else {
            trace!("no results container in page, ending pagination");
            return ExtractedPage {
                results: Vec::new(),
                next_page: None,
            };
        };

        let mut results = Vec::new();
        for child in container.children().filter_map(ElementRef::wrap) {
            if !child
                .value()
                .classes()
                .any(|class| class == RESULT_CARD_CLASS)
            {
                continue;
            }
            results.push(self.extract_card(child, rank_start + results.len() + 1));
        }

        ExtractedPage {
            next_page: self.find_next_page(&document),
            results,
        }
    }

    /// Extracts one result card; missing pieces degrade to empty strings.
    fn extract_card(&self, card: ElementRef<'_>, rank: usize) -> SearchResult {
        let title_el = card.select(&TITLE).next();
        let title = title_el.map(element_text).unwrap_or_default();
        let url = title_el
            .and_then(|h3| h3.select(&LINK).next())
            .and_then(|a| a.value().attr("href"))
            .unwrap_or_default();

        let abstract_text = ABSTRACT_CHAIN
            .iter()
            .find_map(|selector| card.select(selector).next())
            .map(element_text)
            .unwrap_or_default();

        SearchResult {
            title,
            abstract_text: truncate_abstract(&abstract_text, self.abstract_max_length),
            url: normalize_url(url, &self.host_url),
            rank,
        }
    }

    /// Finds the next-page link, if the page has one.
    ///
    /// Takes the LAST `a.n` element and requires its text to carry the
    /// next-page label. Baidu renders a previous-page link with the same
    /// class earlier in the list from page 2 onwards, so last-wins is
    /// load-bearing here; the label check filters out the case where the
    /// last such link is the previous-page one on a final page. This is a
    /// provider-specific heuristic, kept exactly as observed.
    fn find_next_page(&self, document: &Html) -> Option<String> {
        let candidate = document.select(&NAV_LINK).last()?;
        if !element_text(candidate).contains(NEXT_PAGE_LABEL) {
            return None;
        }
        let href = normalize_url(candidate.value().attr("href").unwrap_or_default(), &self.host_url);
        (!href.is_empty()).then_some(href)
    }
}

/// Joins an element's descendant text nodes with single spaces and cleans
/// the result.
fn element_text(element: ElementRef<'_>) -> String {
    clean_text(&element.text().collect::<Vec<_>>().join(" "))
}
