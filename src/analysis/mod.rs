//! Text analysis module for mailsieve.
//!
//! This module provides the text analysis pipeline used for feature
//! extraction: char filters, tokenization, and token filters, assembled
//! behind the [`analyzer::Analyzer`] trait.

pub mod analyzer;
pub mod char_filter;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

// Re-export commonly used types
pub use analyzer::Analyzer;
pub use analyzer::email::EmailAnalyzer;
pub use analyzer::pipeline::PipelineAnalyzer;
pub use token::{Token, TokenStream};
pub use tokenizer::Tokenizer;
pub use tokenizer::word::WordTokenizer;
