//! Unit tests for result-page extraction.

use baidu_search::config::SearchConfig;
use baidu_search::extract::Extractor;
use pretty_assertions::assert_eq;

fn extractor() -> Extractor {
    Extractor::new(&SearchConfig::default())
}

fn page_with_cards(count: usize, next_href: Option<&str>) -> String {
    let cards: String = (1..=count)
        .map(|i| {
            format!(
                r##"<div class="result c-container">
                    <h3 class="t"><a href="/link?id={i}">结果 {i}</a></h3>
                    <div class="c-abstract">第 {i} 条摘要。</div>
                </div>"##
            )
        })
        .collect();
    let nav = next_href
        .map(|href| format!(r##"<a href="{href}" class="n">下一页 &gt;</a>"##))
        .unwrap_or_default();
    format!(
        r##"<html><body>
            <div id="content_left">{cards}</div>
            <div id="page"><a href="/s?pn=0" class="n">&lt; 上一页</a>{nav}</div>
        </body></html>"##
    )
}

// ============================================================================
// Container and Card Recognition
// ============================================================================

#[test]
fn test_absent_container_returns_empty_and_no_next_page() {
    let html = "<html><body><div id='wrapper'>请输入验证码</div></body></html>";
    let page = extractor().extract(html, 0);
    assert!(page.results.is_empty());
    assert_eq!(page.next_page, None);
}

#[test]
fn test_only_card_class_children_are_kept() {
    let html = r##"
        <div id="content_left">
            <span>advertisement</span>
            <div class="result-op">operator block</div>
            <div class="c-container"><h3><a href="/a">only card</a></h3></div>
        </div>
    "##;
    let page = extractor().extract(html, 0);
    assert_eq!(page.results.len(), 1);
    assert_eq!(page.results[0].title, "only card");
}

#[test]
fn test_nested_card_class_is_not_a_card() {
    // Cards are immediate children of the container; a c-container nested
    // inside a non-card child must not be promoted.
    let html = r##"
        <div id="content_left">
            <div class="wrapper"><div class="c-container"><h3><a href="/x">nested</a></h3></div></div>
        </div>
    "##;
    let page = extractor().extract(html, 0);
    assert!(page.results.is_empty());
}

// ============================================================================
// Rank Assignment
// ============================================================================

#[test]
fn test_ranks_are_one_based_and_contiguous() {
    let page = extractor().extract(&page_with_cards(4, None), 0);
    let ranks: Vec<usize> = page.results.iter().map(|r| r.rank).collect();
    assert_eq!(ranks, vec![1, 2, 3, 4]);
}

#[test]
fn test_ranks_continue_from_offset() {
    let page = extractor().extract(&page_with_cards(2, None), 10);
    let ranks: Vec<usize> = page.results.iter().map(|r| r.rank).collect();
    assert_eq!(ranks, vec![11, 12]);
}

// ============================================================================
// Next-Page Detection
// ============================================================================

#[test]
fn test_next_page_taken_from_last_nav_link() {
    let page = extractor().extract(&page_with_cards(1, Some("/s?wd=x&pn=10")), 0);
    assert_eq!(
        page.next_page.as_deref(),
        Some("https://www.baidu.com/s?wd=x&pn=10")
    );
}

#[test]
fn test_no_next_page_when_label_missing_from_last_link() {
    // "previous page" is the last nav link here; an earlier link carrying
    // the next-page label must not be used.
    let html = r##"
        <div id="content_left"><div class="c-container"><h3><a href="/a">t</a></h3></div></div>
        <a href="/s?pn=20" class="n">下一页</a>
        <a href="/s?pn=0" class="n">上一页</a>
    "##;
    let page = extractor().extract(html, 0);
    assert_eq!(page.next_page, None);
}

#[test]
fn test_previous_page_only_nav_has_no_next_page() {
    let page = extractor().extract(&page_with_cards(2, None), 0);
    // The fixture still has a previous-page link; it lacks the label.
    assert_eq!(page.next_page, None);
}

// ============================================================================
// Field Extraction
// ============================================================================

#[test]
fn test_abstract_prefers_class_marker_over_first_div() {
    let html = r##"
        <div id="content_left"><div class="c-container">
            <h3><a href="/a">t</a></h3>
            <div>wrapper text</div>
            <div class="c-abstract">the real abstract</div>
        </div></div>
    "##;
    let page = extractor().extract(html, 0);
    assert_eq!(page.results[0].abstract_text, "the real abstract");
}

#[test]
fn test_title_without_link_yields_empty_url() {
    let html = r##"
        <div id="content_left"><div class="c-container"><h3>纯文本标题</h3></div></div>
    "##;
    let page = extractor().extract(html, 0);
    assert_eq!(page.results[0].title, "纯文本标题");
    assert_eq!(page.results[0].url, "");
}

#[test]
fn test_fields_are_cleaned_before_use() {
    let html = "<div id=\"content_left\"><div class=\"c-container\">\
        <h3><a href=\"/a\">标\u{200b}题\n换行</a></h3>\
        <div class=\"c-abstract\">  摘要 \t 内容  </div>\
        </div></div>";
    let page = extractor().extract(html, 0);
    assert_eq!(page.results[0].title, "标题 换行");
    assert_eq!(page.results[0].abstract_text, "摘要 内容");
}
