//! Pipeline analyzer that combines char filters, a tokenizer, and token filters.

use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::char_filter::CharFilter;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::TokenFilter;
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

/// A configurable analyzer that chains char filters, a tokenizer, and token
/// filters.
///
/// Char filters are applied to the raw text in the order they were added,
/// then the tokenizer splits the result, then token filters are applied to
/// the stream in order.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use mailsieve::analysis::analyzer::Analyzer;
/// use mailsieve::analysis::analyzer::pipeline::PipelineAnalyzer;
/// use mailsieve::analysis::token_filter::lowercase::LowercaseFilter;
/// use mailsieve::analysis::tokenizer::word::WordTokenizer;
///
/// let analyzer = PipelineAnalyzer::new(Arc::new(WordTokenizer::new().unwrap()))
///     .add_token_filter(Arc::new(LowercaseFilter::new()));
///
/// let tokens: Vec<_> = analyzer.analyze("Hello WORLD").unwrap().collect();
/// assert_eq!(tokens[0].text, "hello");
/// assert_eq!(tokens[1].text, "world");
/// ```
#[derive(Clone)]
pub struct PipelineAnalyzer {
    tokenizer: Arc<dyn Tokenizer>,
    char_filters: Vec<Arc<dyn CharFilter>>,
    token_filters: Vec<Arc<dyn TokenFilter>>,
}

impl PipelineAnalyzer {
    /// Create a new pipeline analyzer with the given tokenizer.
    pub fn new(tokenizer: Arc<dyn Tokenizer>) -> Self {
        PipelineAnalyzer {
            tokenizer,
            char_filters: Vec::new(),
            token_filters: Vec::new(),
        }
    }

    /// Add a char filter to the pipeline.
    pub fn add_char_filter(mut self, char_filter: Arc<dyn CharFilter>) -> Self {
        self.char_filters.push(char_filter);
        self
    }

    /// Add a token filter to the pipeline.
    pub fn add_token_filter(mut self, token_filter: Arc<dyn TokenFilter>) -> Self {
        self.token_filters.push(token_filter);
        self
    }

    /// Get the tokenizer used by this analyzer.
    pub fn tokenizer(&self) -> &Arc<dyn Tokenizer> {
        &self.tokenizer
    }

    /// Get the char filters used by this analyzer.
    pub fn char_filters(&self) -> &[Arc<dyn CharFilter>] {
        &self.char_filters
    }

    /// Get the token filters used by this analyzer.
    pub fn token_filters(&self) -> &[Arc<dyn TokenFilter>] {
        &self.token_filters
    }
}

impl std::fmt::Debug for PipelineAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PipelineAnalyzer")
            .field("tokenizer", &self.tokenizer.name())
            .field(
                "char_filters",
                &self.char_filters.iter().map(|c| c.name()).collect::<Vec<_>>(),
            )
            .field(
                "token_filters",
                &self.token_filters.iter().map(|t| t.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl Analyzer for PipelineAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        // Apply char filters to the raw text
        let mut filtered_text = text.to_string();
        for char_filter in &self.char_filters {
            filtered_text = char_filter.filter(&filtered_text);
        }

        // Tokenize
        let mut tokens = self.tokenizer.tokenize(&filtered_text)?;

        // Apply token filters in sequence
        for token_filter in &self.token_filters {
            tokens = token_filter.filter(tokens)?;
        }

        Ok(tokens)
    }

    fn name(&self) -> &'static str {
        "pipeline"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::char_filter::markup_strip::MarkupStripCharFilter;
    use crate::analysis::token::Token;
    use crate::analysis::token_filter::lowercase::LowercaseFilter;
    use crate::analysis::token_filter::min_length::MinLengthFilter;
    use crate::analysis::tokenizer::word::WordTokenizer;

    #[test]
    fn test_pipeline_order() {
        let analyzer = PipelineAnalyzer::new(Arc::new(WordTokenizer::new().unwrap()))
            .add_char_filter(Arc::new(MarkupStripCharFilter::new().unwrap()))
            .add_token_filter(Arc::new(LowercaseFilter::new()))
            .add_token_filter(Arc::new(MinLengthFilter::new()));

        let tokens: Vec<Token> = analyzer
            .analyze("<b>Act NOW</b> x")
            .unwrap()
            .collect();

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "act");
        assert_eq!(tokens[1].text, "now");
    }

    #[test]
    fn test_bare_pipeline_tokenizes_only() {
        let analyzer = PipelineAnalyzer::new(Arc::new(WordTokenizer::new().unwrap()));
        let tokens: Vec<Token> = analyzer.analyze("Hello World").unwrap().collect();

        assert_eq!(tokens[0].text, "Hello");
        assert_eq!(tokens[1].text, "World");
    }
}
