//! Minimum length filter implementation.

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::TokenFilter;
use crate::error::Result;

/// A filter that drops tokens shorter than a minimum character length.
///
/// Single-character tokens (stray letters, list bullets, lone digits) are
/// noise; the default minimum of 2 drops them. Length is measured in
/// characters, not bytes, so a single CJK ideograph counts as one character.
///
/// # Examples
///
/// ```
/// use mailsieve::analysis::token::Token;
/// use mailsieve::analysis::token_filter::TokenFilter;
/// use mailsieve::analysis::token_filter::min_length::MinLengthFilter;
///
/// let filter = MinLengthFilter::new();
/// let tokens = vec![Token::new("a", 0), Token::new("prize", 1)];
/// let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
///     .unwrap()
///     .collect();
///
/// assert_eq!(result.len(), 1);
/// assert_eq!(result[0].text, "prize");
/// ```
#[derive(Clone, Debug)]
pub struct MinLengthFilter {
    min_length: usize,
}

impl MinLengthFilter {
    /// Create a new filter with the default minimum length of 2.
    pub fn new() -> Self {
        MinLengthFilter { min_length: 2 }
    }

    /// Create a new filter with a custom minimum length.
    pub fn with_min_length(min_length: usize) -> Self {
        MinLengthFilter { min_length }
    }

    /// Get the configured minimum length.
    pub fn min_length(&self) -> usize {
        self.min_length
    }
}

impl Default for MinLengthFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenFilter for MinLengthFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let min_length = self.min_length;
        let filtered: Vec<_> = tokens
            .filter(|token| token.char_len() >= min_length)
            .collect();

        Ok(Box::new(filtered.into_iter()))
    }

    fn name(&self) -> &'static str {
        "min_length"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    #[test]
    fn test_drops_single_characters() {
        let filter = MinLengthFilter::new();
        let tokens = vec![
            Token::new("a", 0),
            Token::new("to", 1),
            Token::new("prize", 2),
            Token::new("x", 3),
        ];
        let result: Vec<Token> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].text, "to");
        assert_eq!(result[1].text, "prize");
    }

    #[test]
    fn test_length_measured_in_characters() {
        // one ideograph is 3 bytes but 1 char, so it is dropped
        let filter = MinLengthFilter::new();
        let tokens = vec![Token::new("中", 0), Token::new("中奖", 1)];
        let result: Vec<Token> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].text, "中奖");
    }

    #[test]
    fn test_custom_minimum() {
        let filter = MinLengthFilter::with_min_length(4);
        let tokens = vec![Token::new("win", 0), Token::new("prize", 1)];
        let result: Vec<Token> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].text, "prize");
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(MinLengthFilter::new().name(), "min_length");
    }
}
