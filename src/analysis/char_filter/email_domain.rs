//! Email domain reduction char filter.

use regex::Regex;

use crate::analysis::char_filter::CharFilter;
use crate::error::{MailsieveError, Result};

/// A char filter that replaces embedded email addresses with their domain.
///
/// Local parts are effectively unique per sender and would bloat the
/// vocabulary with single-use features; the domain is the part that
/// generalizes. `alice@promo.example.com` becomes `promo.example.com`.
///
/// # Examples
///
/// ```
/// use mailsieve::analysis::char_filter::CharFilter;
/// use mailsieve::analysis::char_filter::email_domain::EmailDomainCharFilter;
///
/// let filter = EmailDomainCharFilter::new().unwrap();
/// assert_eq!(
///     filter.filter("contact alice@promo.example.com now"),
///     "contact promo.example.com now"
/// );
/// ```
#[derive(Clone, Debug)]
pub struct EmailDomainCharFilter {
    pattern: Regex,
}

impl EmailDomainCharFilter {
    /// Create a new email domain filter.
    pub fn new() -> Result<Self> {
        let pattern = Regex::new(r"[\w.%+-]+@([\w.-]+)")
            .map_err(|e| MailsieveError::analysis(format!("Invalid email pattern: {e}")))?;
        Ok(EmailDomainCharFilter { pattern })
    }
}

impl Default for EmailDomainCharFilter {
    fn default() -> Self {
        Self::new().expect("Email domain pattern should be valid")
    }
}

impl CharFilter for EmailDomainCharFilter {
    fn filter(&self, input: &str) -> String {
        self.pattern.replace_all(input, "$1").into_owned()
    }

    fn name(&self) -> &'static str {
        "email_domain"
    }
}
