//! Token types for text analysis.
//!
//! A [`Token`] is the unit that flows through the analysis pipeline: the
//! tokenizer produces them, token filters transform or drop them, and the
//! feature extractor consumes them.
//!
//! # Examples
//!
//! ```
//! use mailsieve::analysis::token::Token;
//!
//! let token = Token::new("hello", 0);
//! assert_eq!(token.text, "hello");
//! assert_eq!(token.position, 0);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A token represents a single unit of text after tokenization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The token's text content.
    pub text: String,
    /// Position in the token stream (0-based).
    pub position: usize,
}

impl Token {
    /// Create a new token with the given text and position.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Token {
            text: text.into(),
            position,
        }
    }

    /// Return a copy of this token with different text, preserving position.
    pub fn with_text<S: Into<String>>(&self, text: S) -> Self {
        Token {
            text: text.into(),
            position: self.position,
        }
    }

    /// Get the length of the token text in characters.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.text, self.position)
    }
}

/// A stream of tokens produced by a tokenizer or filter.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_creation() {
        let token = Token::new("hello", 3);
        assert_eq!(token.text, "hello");
        assert_eq!(token.position, 3);
    }

    #[test]
    fn test_with_text() {
        let token = Token::new("Hello", 1);
        let lowered = token.with_text("hello");
        assert_eq!(lowered.text, "hello");
        assert_eq!(lowered.position, 1);
    }

    #[test]
    fn test_char_len_counts_characters() {
        // 2 ideographs, 6 bytes
        let token = Token::new("中文", 0);
        assert_eq!(token.char_len(), 2);
    }

    #[test]
    fn test_display() {
        let token = Token::new("spam", 2);
        assert_eq!(token.to_string(), "spam@2");
    }
}
