//! Text and URL normalization applied to scraped fields.
//!
//! Baidu markup mixes zero-width characters, private-use glyph codepoints,
//! and arbitrary whitespace into titles and abstracts; result links come in
//! absolute, scheme-relative, and root-relative flavors. Everything the
//! extractor emits passes through the helpers here first.

use unicode_general_category::{get_general_category, GeneralCategory};

/// Single ellipsis character appended to truncated abstracts.
pub const ELLIPSIS: char = '…';

/// Returns `true` for characters in Unicode general category "Other, *".
///
/// Covers control, format (e.g. zero-width space), surrogate, private-use,
/// and unassigned codepoints.
fn is_other_category(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::Control
            | GeneralCategory::Format
            | GeneralCategory::Surrogate
            | GeneralCategory::PrivateUse
            | GeneralCategory::Unassigned
    )
}

/// Cleans a scraped text fragment.
///
/// Carriage returns and line feeds become spaces, every other "Other, *"
/// category character is dropped, whitespace runs collapse to a single
/// space, and the result is trimmed. Idempotent.
#[must_use]
pub fn clean_text(value: &str) -> String {
    let kept: String = value
        .chars()
        .map(|c| if c == '\r' || c == '\n' { ' ' } else { c })
        .filter(|&c| !is_other_category(c))
        .collect();
    kept.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Resolves a scraped href against the configured host.
///
/// Best-effort, not validating: absolute URLs pass through, `//host/path`
/// gets `https:` prepended, `/path` gets the host prepended, everything
/// else (including `javascript:` and malformed values) passes through
/// unchanged. Empty input yields empty output.
#[must_use]
pub fn normalize_url(url: &str, host_url: &str) -> String {
    if url.is_empty() {
        return String::new();
    }
    if url.starts_with("http") {
        return url.to_string();
    }
    if url.starts_with("//") {
        return format!("https:{url}");
    }
    if url.starts_with('/') {
        return format!("{}{url}", host_url.trim_end_matches('/'));
    }
    url.to_string()
}

/// Truncates a cleaned abstract to `max_chars` characters.
///
/// Character-counted, not byte-counted; trailing whitespace is stripped
/// before the ellipsis so the marker never follows a space.
#[must_use]
pub fn truncate_abstract(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars).collect();
    let mut truncated = cut.trim_end().to_string();
    truncated.push(ELLIPSIS);
    truncated
}
