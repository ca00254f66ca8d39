//! URL host reduction char filter.

use regex::Regex;

use crate::analysis::char_filter::CharFilter;
use crate::error::{MailsieveError, Result};

/// A char filter that replaces URLs with their host component.
///
/// The path and query of a link are noise for classification purposes (they
/// tend to be unique per message), while the host is a strong, repeatable
/// signal. `http://win.example.com/claim?id=123` becomes `win.example.com`.
///
/// # Examples
///
/// ```
/// use mailsieve::analysis::char_filter::CharFilter;
/// use mailsieve::analysis::char_filter::url_host::UrlHostCharFilter;
///
/// let filter = UrlHostCharFilter::new().unwrap();
/// assert_eq!(
///     filter.filter("visit https://shop.example.com/deals?ref=1 today"),
///     "visit shop.example.com today"
/// );
/// ```
#[derive(Clone, Debug)]
pub struct UrlHostCharFilter {
    pattern: Regex,
}

impl UrlHostCharFilter {
    /// Create a new URL host filter.
    pub fn new() -> Result<Self> {
        // Host is everything after the scheme up to the first '/', '?', '#'
        // or whitespace; the remaining non-whitespace tail is discarded.
        let pattern = Regex::new(r"(?i)\bhttps?://([^/?#\s]+)\S*")
            .map_err(|e| MailsieveError::analysis(format!("Invalid URL pattern: {e}")))?;
        Ok(UrlHostCharFilter { pattern })
    }
}

impl Default for UrlHostCharFilter {
    fn default() -> Self {
        Self::new().expect("URL host pattern should be valid")
    }
}

impl CharFilter for UrlHostCharFilter {
    fn filter(&self, input: &str) -> String {
        self.pattern.replace_all(input, "$1").into_owned()
    }

    fn name(&self) -> &'static str {
        "url_host"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_reduced_to_host() {
        let filter = UrlHostCharFilter::new().unwrap();
        assert_eq!(
            filter.filter("http://spam.example.net/win/prize?user=42"),
            "spam.example.net"
        );
    }

    #[test]
    fn test_https_and_mixed_case_scheme() {
        let filter = UrlHostCharFilter::new().unwrap();
        assert_eq!(
            filter.filter("HTTPS://Secure.Example.Com/login"),
            "Secure.Example.Com"
        );
    }

    #[test]
    fn test_bare_host_kept() {
        let filter = UrlHostCharFilter::new().unwrap();
        assert_eq!(
            filter.filter("see https://example.org and reply"),
            "see example.org and reply"
        );
    }

    #[test]
    fn test_text_without_urls_unchanged(){
        let filter = UrlHostCharFilter::new().unwrap();
        assert_eq!(filter.filter("no links here"), "no links here");
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(UrlHostCharFilter::new().unwrap().name(), "url_host");
    }
}
