//! Two-class multinomial Naive Bayes over TF-IDF weighted features.
//!
//! Training records raw counts only; conditional probabilities are computed
//! lazily at prediction time with Laplace smoothing. Posteriors are
//! normalized in the log domain (the binary case of log-sum-exp), so scores
//! neither overflow nor underflow however long the instance is.
//!
//! A [`SpamClassifier`] is an explicitly constructed value:
//! [`SpamClassifier::fit`] builds a new model and nothing mutates one in
//! place. All read paths take `&self`, so a shared reference can serve any
//! number of concurrent prediction callers.
//!
//! # Examples
//!
//! ```
//! use mailsieve::classifier::{ClassifierConfig, SpamClassifier};
//! use mailsieve::feature::record::{EmailRecord, Label, TrainingExample, Verdict};
//!
//! let corpus = vec![
//!     TrainingExample::email(
//!         Label::Spam,
//!         EmailRecord {
//!             subject: Some("Win a free prize now".into()),
//!             body: Some("prize prize click".into()),
//!             ..Default::default()
//!         },
//!     ),
//!     TrainingExample::email(
//!         Label::Ham,
//!         EmailRecord {
//!             subject: Some("Meeting notes".into()),
//!             body: Some("meeting notes attached".into()),
//!             ..Default::default()
//!         },
//!     ),
//! ];
//!
//! let config = ClassifierConfig::default().with_min_document_frequency(1);
//! let model = SpamClassifier::fit(&corpus, config).unwrap();
//! let prediction = model
//!     .predict(&EmailRecord {
//!         subject: Some("free prize".into()),
//!         body: Some("prize".into()),
//!         ..Default::default()
//!     })
//!     .unwrap();
//! assert_eq!(prediction.verdict, Verdict::Spam);
//! ```

use std::cmp::Ordering;
use std::collections::HashMap;

use serde::Serialize;

use crate::classifier::ClassifierConfig;
use crate::classifier::tfidf::TfIdfWeighter;
use crate::classifier::vocabulary::{CorpusCounts, Vocabulary};
use crate::error::Result;
use crate::feature::extractor::{Feature, FeatureExtractor};
use crate::feature::record::{
    EmailRecord, Label, PerLabel, TrainingContent, TrainingExample, Verdict,
};

/// The outcome of classifying one instance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prediction {
    /// The winning class, or `Unknown` for an untrained model.
    pub verdict: Verdict,
    /// The normalized probability of the winning class.
    pub probability: f64,
    /// Normalized probability per class; empty for an untrained model.
    pub scores: HashMap<Label, f64>,
}

impl Prediction {
    /// The sentinel returned when predicting on an untrained model.
    pub fn unknown() -> Self {
        Prediction {
            verdict: Verdict::Unknown,
            probability: 0.0,
            scores: HashMap::new(),
        }
    }
}

/// A trained (or explicitly untrained) spam classification model.
pub struct SpamClassifier {
    config: ClassifierConfig,
    extractor: FeatureExtractor,
    counts: CorpusCounts,
    vocabulary: Vocabulary,
    trained: bool,
}

impl SpamClassifier {
    /// Create an empty, untrained model. Predictions return the
    /// [`Prediction::unknown`] sentinel until a fitted model replaces it.
    pub fn untrained(config: ClassifierConfig) -> Result<Self> {
        Ok(SpamClassifier {
            config,
            extractor: FeatureExtractor::new()?,
            counts: CorpusCounts::new(),
            vocabulary: Vocabulary::default(),
            trained: false,
        })
    }

    /// Fit a new model over a labeled corpus.
    ///
    /// A single pass accumulates document frequencies and per-class counts,
    /// then derives the vocabulary. Fitting an empty corpus yields a model
    /// that is still untrained.
    pub fn fit(corpus: &[TrainingExample], config: ClassifierConfig) -> Result<Self> {
        let extractor = FeatureExtractor::new()?;
        let mut counts = CorpusCounts::new();

        for example in corpus {
            let features = match &example.content {
                TrainingContent::Email { email_data } => extractor.extract(email_data)?,
                TrainingContent::Text { text } => extractor.extract_text(text)?,
            };
            counts.add_document(example.label, &features, config.field_weights);
        }

        let vocabulary = counts.build_vocabulary(config.min_document_frequency);
        let trained = counts.total_documents() > 0;

        Ok(SpamClassifier {
            config,
            extractor,
            counts,
            vocabulary,
            trained,
        })
    }

    /// Assemble a model from reconstructed state (snapshot import).
    pub(crate) fn from_state(
        config: ClassifierConfig,
        counts: CorpusCounts,
        trained: bool,
    ) -> Result<Self> {
        let vocabulary = counts.build_vocabulary(config.min_document_frequency);
        Ok(SpamClassifier {
            config,
            extractor: FeatureExtractor::new()?,
            counts,
            vocabulary,
            trained,
        })
    }

    /// Classify a structured email record.
    pub fn predict(&self, record: &EmailRecord) -> Result<Prediction> {
        let features = self.extractor.extract(record)?;
        Ok(self.predict_features(&features))
    }

    /// Classify a plain text document, tokenized as a whole.
    pub fn predict_text(&self, text: &str) -> Result<Prediction> {
        let features = self.extractor.extract_text(text)?;
        Ok(self.predict_features(&features))
    }

    /// Rank the instance's vocabulary-filtered TF-IDF weights and return the
    /// top `n` (feature, weight) pairs. Display only; never part of scoring.
    pub fn top_features(&self, record: &EmailRecord, n: usize) -> Result<Vec<(String, f64)>> {
        let features = self.extractor.extract(record)?;
        Ok(self.rank_features(&features, n))
    }

    /// As [`top_features`](Self::top_features), for a plain text document.
    pub fn top_features_text(&self, text: &str, n: usize) -> Result<Vec<(String, f64)>> {
        let features = self.extractor.extract_text(text)?;
        Ok(self.rank_features(&features, n))
    }

    /// Whether the model has completed at least one fit.
    pub fn is_trained(&self) -> bool {
        self.trained
    }

    /// The model's configuration.
    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// The corpus accumulators backing this model.
    pub fn counts(&self) -> &CorpusCounts {
        &self.counts
    }

    /// Number of vocabulary entries.
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    fn predict_features(&self, features: &[Feature]) -> Prediction {
        if !self.trained {
            return Prediction::unknown();
        }

        let weighter = TfIdfWeighter::new(&self.counts);
        let mut weighted: Vec<(String, f64)> = weighter
            .weigh(features, self.config.field_weights)
            .into_iter()
            .collect();
        // fixed summation order keeps repeated predictions bit-identical
        weighted.sort_unstable_by(|a, b| a.0.cmp(&b.0));

        let alpha = self.config.alpha;
        let total_documents = self.counts.total_documents() as f64;
        let vocabulary_size = self.vocabulary.len().max(1) as f64;

        let mut log_scores = PerLabel::<f64>::default();
        for label in Label::ALL {
            let class = self.counts.class(label);
            let prior = (class.documents as f64 + alpha) / (total_documents + 2.0 * alpha);
            let mut score = prior.ln();

            for (term, weight) in &weighted {
                if !self.vocabulary.contains(term) {
                    continue;
                }
                let conditional = (class.word_count(term) as f64 + alpha)
                    / (class.total_words as f64 + alpha * vocabulary_size);
                score += weight * conditional.ln();
            }

            *log_scores.get_mut(label) = score;
        }

        // binary log-sum-exp: shift by the max before exponentiating
        let max_score = log_scores.spam.max(log_scores.ham);
        let exp_spam = (log_scores.spam - max_score).exp();
        let exp_ham = (log_scores.ham - max_score).exp();
        let sum = exp_spam + exp_ham;
        let p_spam = exp_spam / sum;
        let p_ham = exp_ham / sum;

        let (verdict, probability) = if p_spam >= p_ham {
            (Verdict::Spam, p_spam)
        } else {
            (Verdict::Ham, p_ham)
        };

        let mut scores = HashMap::new();
        scores.insert(Label::Spam, p_spam);
        scores.insert(Label::Ham, p_ham);

        Prediction {
            verdict,
            probability,
            scores,
        }
    }

    fn rank_features(&self, features: &[Feature], n: usize) -> Vec<(String, f64)> {
        if !self.trained {
            return Vec::new();
        }

        let weighter = TfIdfWeighter::new(&self.counts);
        let mut ranked: Vec<(String, f64)> = weighter
            .weigh(features, self.config.field_weights)
            .into_iter()
            .filter(|(term, _)| self.vocabulary.contains(term))
            .collect();

        ranked.sort_unstable_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.0.cmp(&b.0))
        });
        ranked.truncate(n);
        ranked
    }
}

impl std::fmt::Debug for SpamClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpamClassifier")
            .field("trained", &self.trained)
            .field("total_documents", &self.counts.total_documents())
            .field("vocabulary_size", &self.vocabulary.len())
            .field("config", &self.config)
            .finish()
    }
}
