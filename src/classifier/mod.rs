//! The statistical classification engine.
//!
//! Training accumulates corpus-wide document frequencies and per-class word
//! counts ([`vocabulary`]), prediction weighs an instance with TF-IDF
//! ([`tfidf`]) and scores it with a two-class multinomial Naive Bayes model
//! ([`bayes`]). The full model state round-trips through plain data
//! ([`snapshot`]).

pub mod bayes;
pub mod snapshot;
pub mod tfidf;
pub mod vocabulary;

use serde::{Deserialize, Serialize};

use crate::feature::extractor::FieldWeights;

// Re-export commonly used types
pub use bayes::{Prediction, SpamClassifier};
pub use snapshot::ModelSnapshot;
pub use tfidf::TfIdfWeighter;
pub use vocabulary::{ClassCounts, CorpusCounts, Vocabulary};

/// Configuration for a [`SpamClassifier`].
///
/// # Examples
///
/// ```
/// use mailsieve::classifier::ClassifierConfig;
///
/// let config = ClassifierConfig::default();
/// assert_eq!(config.alpha, 1.0);
/// assert_eq!(config.min_document_frequency, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Laplace smoothing constant applied to priors and word conditionals.
    pub alpha: f64,
    /// Minimum document frequency for a feature to enter the vocabulary.
    pub min_document_frequency: u64,
    /// Per-field occurrence multipliers.
    pub field_weights: FieldWeights,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        ClassifierConfig {
            alpha: 1.0,
            min_document_frequency: 2,
            field_weights: FieldWeights::default(),
        }
    }
}

impl ClassifierConfig {
    /// Override the smoothing constant.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Override the vocabulary threshold.
    pub fn with_min_document_frequency(mut self, min_document_frequency: u64) -> Self {
        self.min_document_frequency = min_document_frequency;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = ClassifierConfig::default();
        assert_eq!(config.alpha, 1.0);
        assert_eq!(config.min_document_frequency, 2);
        assert_eq!(config.field_weights, FieldWeights::default());
    }

    #[test]
    fn test_config_builders() {
        let config = ClassifierConfig::default()
            .with_alpha(0.5)
            .with_min_document_frequency(1);
        assert_eq!(config.alpha, 0.5);
        assert_eq!(config.min_document_frequency, 1);
    }
}
