//! Char filter implementations for text normalization.
//!
//! Char filters pre-process the raw text string before it reaches the
//! tokenizer. Email bodies arrive full of markup, URLs, and embedded
//! addresses; the filters in this module rewrite those into the pieces that
//! actually carry signal (the URL's host, the address's domain) so the
//! tokenizer sees clean text.
//!
//! # Available Filters
//!
//! - [`markup_strip::MarkupStripCharFilter`] - Replaces markup tags with spaces
//! - [`url_host::UrlHostCharFilter`] - Reduces URLs to their host component
//! - [`email_domain::EmailDomainCharFilter`] - Reduces email addresses to their domain

/// Trait for character filters that transform text before tokenization.
///
/// The trait requires `Send + Sync` to allow use in concurrent contexts.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text and return the rewritten text.
    fn filter(&self, input: &str) -> String;

    /// Get the name of this char filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

// Individual char filter modules
pub mod email_domain;
pub mod markup_strip;
pub mod url_host;
