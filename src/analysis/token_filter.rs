//! Token filter implementations for token transformation.
//!
//! Token filters transform the stream produced by a tokenizer. Filters can
//! modify or remove tokens; they are applied sequentially in the order the
//! analyzer chains them.
//!
//! # Available Filters
//!
//! - [`lowercase::LowercaseFilter`] - Converts tokens to lowercase
//! - [`min_length::MinLengthFilter`] - Drops tokens shorter than a minimum length
//!
//! # Examples
//!
//! ```
//! use mailsieve::analysis::token::Token;
//! use mailsieve::analysis::token_filter::TokenFilter;
//! use mailsieve::analysis::token_filter::lowercase::LowercaseFilter;
//!
//! let filter = LowercaseFilter::new();
//! let tokens = vec![Token::new("Hello", 0), Token::new("WORLD", 1)];
//! let filtered: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(filtered[0].text, "hello");
//! assert_eq!(filtered[1].text, "world");
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that transform token streams.
///
/// The trait requires `Send + Sync` to allow use in concurrent contexts.
pub trait TokenFilter: Send + Sync {
    /// Apply this filter to the token stream and return the transformed stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

// Individual token filter modules
pub mod lowercase;
pub mod min_length;
