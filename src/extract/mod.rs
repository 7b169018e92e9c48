//! HTML-to-entity extraction engine.
//!
//! Pure functions over response text: the network layer fetches, this
//! module parses. Two strategies, chosen by endpoint:
//!
//! - [`detail`]: single-video pages. JSON-LD structured data fast path,
//!   with DOM scraping supplementing the fields structured data omits.
//! - [`listing`]: search and channel pages. Positional scraping of
//!   listing entries, tolerant per item (one malformed entry never aborts
//!   the rest).
//!
//! Missing optional fields degrade to absent values; only a missing
//! top-level structure (no parseable JSON-LD block where one is required)
//! is an error.

pub mod detail;
pub mod duration;
pub mod listing;
pub mod styles;

/// Normalize a scraped text node: collapse surrounding whitespace, map
/// empty results to `None`. The single place where the "absent over empty"
/// policy for text fields lives.
pub(crate) fn non_empty(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Last path segment of an href, ignoring a trailing slash.
/// `"/c/SomeChannel/"` → `"SomeChannel"`.
pub(crate) fn last_path_segment(href: &str) -> Option<String> {
    non_empty(href.trim_end_matches('/').rsplit('/').next().unwrap_or(""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_empty_trims_and_rejects_blank() {
        assert_eq!(non_empty("  hi \n"), Some("hi".to_string()));
        assert_eq!(non_empty("   "), None);
        assert_eq!(non_empty(""), None);
    }

    #[test]
    fn last_path_segment_ignores_trailing_slash() {
        assert_eq!(last_path_segment("/c/Chan/"), Some("Chan".to_string()));
        assert_eq!(last_path_segment("/c/Chan"), Some("Chan".to_string()));
        assert_eq!(last_path_segment("/"), None);
    }
}
