//! Corpus accumulators and the filtered vocabulary.
//!
//! [`CorpusCounts`] is everything one training pass collects: the
//! document-frequency table, per-class word counts, and document counts.
//! [`Vocabulary`] is derived from it after the pass by keeping features whose
//! document frequency meets the configured minimum.
//!
//! The document-frequency table retains *all* features, including those below
//! the vocabulary threshold; idf lookups read the unfiltered table while
//! scoring is gated on vocabulary membership.

use std::collections::hash_map::Entry;

use ahash::{AHashMap, AHashSet};

use crate::feature::extractor::{Feature, FieldWeights};
use crate::feature::record::{Label, PerLabel};

/// Per-class accumulators.
#[derive(Debug, Clone, Default)]
pub struct ClassCounts {
    /// Number of training documents of this class.
    pub documents: u64,
    /// Total word count of this class (weighted multiplicity).
    pub total_words: u64,
    /// Per-feature occurrence counts (weighted multiplicity).
    pub word_counts: AHashMap<String, u64>,
}

impl ClassCounts {
    /// The occurrence count of one feature, 0 if never seen in this class.
    pub fn word_count(&self, text: &str) -> u64 {
        self.word_counts.get(text).copied().unwrap_or(0)
    }
}

/// All accumulators of one training pass.
#[derive(Debug, Clone, Default)]
pub struct CorpusCounts {
    /// Feature text → number of distinct documents containing it.
    document_frequency: AHashMap<String, u64>,
    /// Feature texts in first-seen corpus order; keeps vocabulary indices and
    /// snapshots deterministic.
    feature_order: Vec<String>,
    /// Per-class accumulators.
    classes: PerLabel<ClassCounts>,
    /// Total number of training documents.
    total_documents: u64,
}

impl CorpusCounts {
    /// Create empty accumulators.
    pub fn new() -> Self {
        CorpusCounts::default()
    }

    /// Rebuild accumulators from their parts (snapshot import).
    pub(crate) fn from_parts(
        document_frequency: AHashMap<String, u64>,
        feature_order: Vec<String>,
        classes: PerLabel<ClassCounts>,
        total_documents: u64,
    ) -> Self {
        CorpusCounts {
            document_frequency,
            feature_order,
            classes,
            total_documents,
        }
    }

    /// Fold one labeled document into the accumulators.
    ///
    /// Document frequency rises by one per *distinct* feature text; the
    /// class's word counts rise by the field weight per feature *instance*.
    pub fn add_document(&mut self, label: Label, features: &[Feature], weights: FieldWeights) {
        let mut seen = AHashSet::new();
        for feature in features {
            if seen.insert(feature.text.clone()) {
                match self.document_frequency.entry(feature.text.clone()) {
                    Entry::Occupied(mut entry) => *entry.get_mut() += 1,
                    Entry::Vacant(entry) => {
                        entry.insert(1);
                        self.feature_order.push(feature.text.clone());
                    }
                }
            }

            let weight = weights.weight(feature.channel);
            let class = self.classes.get_mut(label);
            *class.word_counts.entry(feature.text.clone()).or_insert(0) += weight;
            class.total_words += weight;
        }

        self.classes.get_mut(label).documents += 1;
        self.total_documents += 1;
    }

    /// The document frequency of one feature, 0 if never seen.
    pub fn document_frequency(&self, text: &str) -> u64 {
        self.document_frequency.get(text).copied().unwrap_or(0)
    }

    /// Iterate all document-frequency entries.
    pub fn document_frequencies(&self) -> impl Iterator<Item = (&str, u64)> {
        self.document_frequency.iter().map(|(t, &df)| (t.as_str(), df))
    }

    /// Number of distinct features tracked.
    pub fn tracked_features(&self) -> usize {
        self.document_frequency.len()
    }

    /// Feature texts in first-seen corpus order.
    pub fn feature_order(&self) -> &[String] {
        &self.feature_order
    }

    /// The accumulators of one class.
    pub fn class(&self, label: Label) -> &ClassCounts {
        self.classes.get(label)
    }

    /// Total number of training documents.
    pub fn total_documents(&self) -> u64 {
        self.total_documents
    }

    /// Derive the vocabulary: features with document frequency at or above
    /// `min_document_frequency`, indexed in first-seen order. Sub-threshold
    /// features stay in the document-frequency table but never enter the
    /// vocabulary.
    pub fn build_vocabulary(&self, min_document_frequency: u64) -> Vocabulary {
        let mut indices = AHashMap::new();
        for text in &self.feature_order {
            if self.document_frequency(text) >= min_document_frequency {
                let index = indices.len();
                indices.insert(text.clone(), index);
            }
        }
        Vocabulary { indices }
    }
}

/// The filtered feature set that gates scoring.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    indices: AHashMap<String, usize>,
}

impl Vocabulary {
    /// Whether a feature is in the vocabulary.
    pub fn contains(&self, text: &str) -> bool {
        self.indices.contains_key(text)
    }

    /// The stable index of a feature, if present.
    pub fn index_of(&self, text: &str) -> Option<usize> {
        self.indices.get(text).copied()
    }

    /// Number of vocabulary entries.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Whether the vocabulary is empty.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}
