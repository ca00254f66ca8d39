//! Word tokenizer for email text.

use regex::Regex;

use super::Tokenizer;
use crate::analysis::token::{Token, TokenStream};
use crate::error::{MailsieveError, Result};

/// A tokenizer that keeps word characters and splits on whitespace.
///
/// Every character that is not a word character, `@`, `.`, or `-` is removed
/// (whitespace is retained as the split boundary). The `\w` class in the
/// `regex` crate is Unicode-aware, so CJK ideographs survive as token
/// characters; runs of ideographs without surrounding whitespace form a
/// single token.
///
/// Punctuation inside a word is removed rather than treated as a boundary:
/// `don't` becomes `dont`, not `don` + `t`.
///
/// # Examples
///
/// ```
/// use mailsieve::analysis::tokenizer::Tokenizer;
/// use mailsieve::analysis::tokenizer::word::WordTokenizer;
///
/// let tokenizer = WordTokenizer::new().unwrap();
/// let tokens: Vec<_> = tokenizer.tokenize("free prize!").unwrap().collect();
/// assert_eq!(tokens[0].text, "free");
/// assert_eq!(tokens[1].text, "prize");
/// ```
#[derive(Clone, Debug)]
pub struct WordTokenizer {
    strip: Regex,
}

impl WordTokenizer {
    /// Create a new word tokenizer.
    pub fn new() -> Result<Self> {
        let strip = Regex::new(r"[^\w@.\-\s]")
            .map_err(|e| MailsieveError::analysis(format!("Invalid strip pattern: {e}")))?;
        Ok(WordTokenizer { strip })
    }
}

impl Default for WordTokenizer {
    fn default() -> Self {
        Self::new().expect("Word tokenizer pattern should be valid")
    }
}

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let stripped = self.strip.replace_all(text, "");
        let tokens: Vec<Token> = stripped
            .split_whitespace()
            .enumerate()
            .map(|(position, word)| Token::new(word, position))
            .collect();

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "word"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_tokenizer() {
        let tokenizer = WordTokenizer::new().unwrap();
        let tokens: Vec<Token> = tokenizer.tokenize("hello world").unwrap().collect();

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "hello");
        assert_eq!(tokens[0].position, 0);
        assert_eq!(tokens[1].text, "world");
        assert_eq!(tokens[1].position, 1);
    }

    #[test]
    fn test_punctuation_removed_within_words() {
        let tokenizer = WordTokenizer::new().unwrap();
        let tokens: Vec<Token> = tokenizer.tokenize("don't panic!!!").unwrap().collect();

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "dont");
        assert_eq!(tokens[1].text, "panic");
    }

    #[test]
    fn test_domain_characters_kept() {
        let tokenizer = WordTokenizer::new().unwrap();
        let tokens: Vec<Token> = tokenizer
            .tokenize("win.example.com user@host win-big")
            .unwrap()
            .collect();

        assert_eq!(tokens[0].text, "win.example.com");
        assert_eq!(tokens[1].text, "user@host");
        assert_eq!(tokens[2].text, "win-big");
    }

    #[test]
    fn test_cjk_ideographs_survive() {
        let tokenizer = WordTokenizer::new().unwrap();
        let tokens: Vec<Token> = tokenizer.tokenize("中奖 通知").unwrap().collect();

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "中奖");
        assert_eq!(tokens[1].text, "通知");
    }

    #[test]
    fn test_empty_input() {
        let tokenizer = WordTokenizer::new().unwrap();
        let tokens: Vec<Token> = tokenizer.tokenize("").unwrap().collect();
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(WordTokenizer::new().unwrap().name(), "word");
    }
}
