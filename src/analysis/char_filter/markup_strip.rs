//! Markup stripping char filter.

use regex::Regex;

use crate::analysis::char_filter::CharFilter;
use crate::error::{MailsieveError, Result};

/// A char filter that replaces markup tags with spaces.
///
/// HTML email bodies are tokenized on their visible text only; tag names and
/// attributes never become features. Tags are replaced with a space rather
/// than removed so that `foo<br>bar` splits into two tokens.
///
/// # Examples
///
/// ```
/// use mailsieve::analysis::char_filter::CharFilter;
/// use mailsieve::analysis::char_filter::markup_strip::MarkupStripCharFilter;
///
/// let filter = MarkupStripCharFilter::new().unwrap();
/// assert_eq!(filter.filter("<p>Hello</p>world"), " Hello world");
/// ```
#[derive(Clone, Debug)]
pub struct MarkupStripCharFilter {
    pattern: Regex,
}

impl MarkupStripCharFilter {
    /// Create a new markup stripping filter.
    pub fn new() -> Result<Self> {
        let pattern = Regex::new(r"<[^>]*>")
            .map_err(|e| MailsieveError::analysis(format!("Invalid markup pattern: {e}")))?;
        Ok(MarkupStripCharFilter { pattern })
    }
}

impl Default for MarkupStripCharFilter {
    fn default() -> Self {
        Self::new().expect("Markup strip pattern should be valid")
    }
}

impl CharFilter for MarkupStripCharFilter {
    fn filter(&self, input: &str) -> String {
        self.pattern.replace_all(input, " ").into_owned()
    }

    fn name(&self) -> &'static str {
        "markup_strip"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_tags() {
        let filter = MarkupStripCharFilter::new().unwrap();
        assert_eq!(
            filter.filter("<html><body>Buy now</body></html>"),
            "  Buy now  "
        );
    }

    #[test]
    fn test_tags_with_attributes() {
        let filter = MarkupStripCharFilter::new().unwrap();
        assert_eq!(
            filter.filter(r#"click <a href="http://x.test">here</a>"#),
            "click  here "
        );
    }

    #[test]
    fn test_text_without_markup_unchanged() {
        let filter = MarkupStripCharFilter::new().unwrap();
        assert_eq!(filter.filter("plain text"), "plain text");
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(MarkupStripCharFilter::new().unwrap().name(), "markup_strip");
    }
}
