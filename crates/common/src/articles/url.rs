//! URL scheme normalization

use regex_lite::Regex;
use std::sync::OnceLock;

/// Scheme prepended when a submitted URL has none
pub const DEFAULT_SCHEME: &str = "https://";

fn scheme_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?i)^https?://").expect("valid scheme pattern"))
}

/// Whether `url` already starts with `http://` or `https://`, any case
pub fn has_http_scheme(url: &str) -> bool {
    scheme_pattern().is_match(url)
}

/// Prefix `https://` unless the URL already names an http(s) scheme.
///
/// Any other scheme (`ftp://`, `mailto:`) is treated as part of the
/// address and gets the prefix too.
pub fn normalize_url(url: &str) -> String {
    if has_http_scheme(url) {
        url.to_string()
    } else {
        format!("{}{}", DEFAULT_SCHEME, url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_host_gets_https() {
        assert_eq!(normalize_url("example.com/post"), "https://example.com/post");
    }

    #[test]
    fn test_existing_scheme_unchanged() {
        assert_eq!(normalize_url("http://example.com"), "http://example.com");
        assert_eq!(normalize_url("https://example.com/a?b=c"), "https://example.com/a?b=c");
    }

    #[test]
    fn test_scheme_check_ignores_case() {
        assert_eq!(normalize_url("HTTPS://Example.com"), "HTTPS://Example.com");
        assert_eq!(normalize_url("Http://example.com"), "Http://example.com");
    }

    #[test]
    fn test_scheme_must_be_leading_and_complete() {
        assert_eq!(normalize_url("https:/example.com"), "https://https:/example.com");
        assert_eq!(normalize_url("example.com?next=http://x"), "https://example.com?next=http://x");
        assert_eq!(normalize_url("ftp://files.example.com"), "https://ftp://files.example.com");
    }
}
