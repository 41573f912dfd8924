//! Anchor-tag link extraction from HTML pages

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref HREF_RE: Regex =
        Regex::new(r#"<a\s+(?:[^>]*?)href="([^"]*)""#).expect("Invalid regex");
}

/// Extract the href targets of all anchor tags in an HTML document.
///
/// Targets are returned verbatim; filtering to in-corpus pages happens
/// at corpus construction.
pub fn extract_hrefs(content: &str) -> Vec<String> {
    HREF_RE
        .captures_iter(content)
        .filter_map(|cap| cap.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}
