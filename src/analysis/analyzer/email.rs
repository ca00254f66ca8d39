//! Email analyzer with defaults for spam classification.

use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::char_filter::email_domain::EmailDomainCharFilter;
use crate::analysis::char_filter::markup_strip::MarkupStripCharFilter;
use crate::analysis::char_filter::url_host::UrlHostCharFilter;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::lowercase::LowercaseFilter;
use crate::analysis::token_filter::min_length::MinLengthFilter;
use crate::analysis::tokenizer::word::WordTokenizer;
use crate::error::Result;

/// The default analysis pipeline for email text.
///
/// # Pipeline
///
/// 1. MarkupStripCharFilter (tags → spaces)
/// 2. UrlHostCharFilter (URLs → host)
/// 3. EmailDomainCharFilter (addresses → domain)
/// 4. WordTokenizer (word/CJK characters, whitespace split)
/// 5. LowercaseFilter
/// 6. MinLengthFilter (drops single-character tokens)
///
/// There is no stop word filtering; the classifier's vocabulary threshold
/// takes over that role.
///
/// # Examples
///
/// ```
/// use mailsieve::analysis::analyzer::Analyzer;
/// use mailsieve::analysis::analyzer::email::EmailAnalyzer;
///
/// let analyzer = EmailAnalyzer::new().unwrap();
/// let tokens: Vec<_> = analyzer
///     .analyze("<b>WIN</b> at http://prizes.example.com/claim")
///     .unwrap()
///     .collect();
///
/// assert_eq!(tokens[0].text, "win");
/// assert_eq!(tokens[1].text, "at");
/// assert_eq!(tokens[2].text, "prizes.example.com");
/// ```
pub struct EmailAnalyzer {
    inner: PipelineAnalyzer,
}

impl EmailAnalyzer {
    /// Create a new email analyzer with default settings.
    pub fn new() -> Result<Self> {
        let tokenizer = Arc::new(WordTokenizer::new()?);
        let inner = PipelineAnalyzer::new(tokenizer)
            .add_char_filter(Arc::new(MarkupStripCharFilter::new()?))
            .add_char_filter(Arc::new(UrlHostCharFilter::new()?))
            .add_char_filter(Arc::new(EmailDomainCharFilter::new()?))
            .add_token_filter(Arc::new(LowercaseFilter::new()))
            .add_token_filter(Arc::new(MinLengthFilter::new()));

        Ok(EmailAnalyzer { inner })
    }

    /// Get the inner pipeline analyzer.
    pub fn inner(&self) -> &PipelineAnalyzer {
        &self.inner
    }
}

impl Default for EmailAnalyzer {
    fn default() -> Self {
        Self::new().expect("Email analyzer should be creatable with default settings")
    }
}

impl Analyzer for EmailAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "email"
    }
}
