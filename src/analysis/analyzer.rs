//! Analyzer trait and implementations.
//!
//! Analyzers combine char filters, a tokenizer, and token filters into a
//! complete text processing pipeline:
//!
//! ```text
//! Raw Text → Char Filters → Tokenizer → Token Filters → Token Stream
//! ```
//!
//! # Available Implementations
//!
//! - [`pipeline::PipelineAnalyzer`] - Custom char filter + tokenizer + token filter chains
//! - [`email::EmailAnalyzer`] - The default pipeline for email text
//!
//! # Examples
//!
//! ```
//! use mailsieve::analysis::analyzer::Analyzer;
//! use mailsieve::analysis::analyzer::email::EmailAnalyzer;
//!
//! let analyzer = EmailAnalyzer::new().unwrap();
//! let tokens: Vec<_> = analyzer.analyze("Hello World").unwrap().collect();
//!
//! assert_eq!(tokens[0].text, "hello");
//! assert_eq!(tokens[1].text, "world");
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for analyzers that convert text into processed tokens.
///
/// The trait requires `Send + Sync` so a single analyzer instance can be
/// shared by concurrent prediction callers.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

// Individual analyzer modules
pub mod email;
pub mod pipeline;
