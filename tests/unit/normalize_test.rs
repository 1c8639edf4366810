//! Unit tests for text cleaning, URL normalization, and truncation.

use baidu_search::normalize::{clean_text, normalize_url, truncate_abstract};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

// ============================================================================
// Text Cleaning Tests
// ============================================================================

#[test]
fn test_clean_text_removes_control_characters() {
    assert_eq!(clean_text("a\u{0000}b\u{0007}c"), "abc");
}

#[test]
fn test_clean_text_removes_zero_width_and_private_use() {
    // U+200B zero-width space (Cf), U+E610 private use (Co).
    assert_eq!(clean_text("圆头\u{200b}耄耋\u{e610}"), "圆头耄耋");
}

#[test]
fn test_clean_text_collapses_newline_runs_to_single_spaces() {
    assert_eq!(clean_text("first\n\nsecond\r\nthird"), "first second third");
}

#[test]
fn test_clean_text_trims_surrounding_whitespace() {
    assert_eq!(clean_text("  padded value \t"), "padded value");
}

proptest! {
    #[test]
    fn test_clean_text_is_idempotent(s in ".*") {
        let once = clean_text(&s);
        prop_assert_eq!(clean_text(&once), once);
    }

    #[test]
    fn test_clean_text_output_has_no_control_characters(s in ".*") {
        let cleaned = clean_text(&s);
        prop_assert!(!cleaned.chars().any(char::is_control));
    }
}

// ============================================================================
// URL Normalization Tests
// ============================================================================

const HOST: &str = "https://www.baidu.com";

#[test]
fn test_normalize_url_prepends_host_for_root_relative() {
    assert_eq!(
        normalize_url("/link?id=1", HOST),
        "https://www.baidu.com/link?id=1"
    );
}

#[test]
fn test_normalize_url_adds_scheme_for_protocol_relative() {
    assert_eq!(
        normalize_url("//cdn.example.com/x", HOST),
        "https://cdn.example.com/x"
    );
}

#[test]
fn test_normalize_url_passes_absolute_through() {
    assert_eq!(normalize_url("http://a.com", HOST), "http://a.com");
}

#[test]
fn test_normalize_url_empty_yields_empty() {
    assert_eq!(normalize_url("", HOST), "");
}

#[test]
fn test_normalize_url_is_best_effort_not_validating() {
    assert_eq!(
        normalize_url("javascript:void(0)", HOST),
        "javascript:void(0)"
    );
    assert_eq!(normalize_url("not a url at all", HOST), "not a url at all");
}

// ============================================================================
// Abstract Truncation Tests
// ============================================================================

#[test]
fn test_truncate_abstract_appends_single_ellipsis() {
    let long = "x".repeat(60);
    let truncated = truncate_abstract(&long, 50);
    assert_eq!(truncated.chars().count(), 51);
    assert!(truncated.ends_with('…'));
    assert!(!truncated.ends_with("..."));
}

#[test]
fn test_truncate_abstract_no_whitespace_before_ellipsis() {
    let text = format!("{} {}", "a".repeat(49), "b".repeat(20));
    let truncated = truncate_abstract(&text, 50);
    assert_eq!(truncated, format!("{}…", "a".repeat(49)));
}

#[test]
fn test_truncate_abstract_exact_length_untouched() {
    let text = "y".repeat(50);
    assert_eq!(truncate_abstract(&text, 50), text);
}
