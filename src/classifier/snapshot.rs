//! Plain-data snapshots of the full model state.
//!
//! A [`ModelSnapshot`] carries every accumulator, scalar count, and the
//! trained flag — enough to reconstruct a functionally identical model with
//! no other input. Maps are serialized as `BTreeMap` and the vocabulary's
//! insertion order travels as an explicit vector, so exporting the same model
//! twice produces byte-identical JSON.
//!
//! Import is lenient: every field has a default, so a snapshot with missing
//! or malformed fields degrades to a safe empty value, and a snapshot that
//! does not parse at all yields an untrained model instead of an error. The
//! persistence collaborator that reads and writes the bytes lives outside the
//! core (see the CLI).

use std::collections::BTreeMap;

use ahash::{AHashMap, AHashSet};
use serde::{Deserialize, Serialize};

use crate::classifier::ClassifierConfig;
use crate::classifier::bayes::SpamClassifier;
use crate::classifier::vocabulary::{ClassCounts, CorpusCounts};
use crate::error::Result;
use crate::feature::extractor::FieldWeights;
use crate::feature::record::{Label, PerLabel};

fn default_alpha() -> f64 {
    1.0
}

fn default_min_document_frequency() -> u64 {
    2
}

/// Serialized accumulators of one class.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassSnapshot {
    /// Number of training documents of this class.
    pub document_count: u64,
    /// Total word count of this class.
    pub total_word_count: u64,
    /// Per-feature occurrence counts.
    pub word_counts: BTreeMap<String, u64>,
}

impl ClassSnapshot {
    fn from_counts(counts: &ClassCounts) -> Self {
        ClassSnapshot {
            document_count: counts.documents,
            total_word_count: counts.total_words,
            word_counts: counts
                .word_counts
                .iter()
                .map(|(t, &c)| (t.clone(), c))
                .collect(),
        }
    }

    fn into_counts(self) -> ClassCounts {
        ClassCounts {
            documents: self.document_count,
            total_words: self.total_word_count,
            word_counts: self.word_counts.into_iter().collect(),
        }
    }
}

/// The complete serialized state of a [`SpamClassifier`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelSnapshot {
    /// Feature text → distinct-document count, for all tracked features.
    pub document_frequency: BTreeMap<String, u64>,
    /// Feature texts in first-seen corpus order.
    pub feature_order: Vec<String>,
    /// Spam-class accumulators.
    pub spam: ClassSnapshot,
    /// Ham-class accumulators.
    pub ham: ClassSnapshot,
    /// Total number of training documents.
    pub total_documents: u64,
    /// Laplace smoothing constant.
    pub alpha: f64,
    /// Vocabulary document-frequency threshold.
    pub min_document_frequency: u64,
    /// Per-field occurrence multipliers.
    pub field_weights: FieldWeights,
    /// Whether the model had completed a fit.
    pub trained: bool,
}

impl Default for ModelSnapshot {
    fn default() -> Self {
        ModelSnapshot {
            document_frequency: BTreeMap::new(),
            feature_order: Vec::new(),
            spam: ClassSnapshot::default(),
            ham: ClassSnapshot::default(),
            total_documents: 0,
            alpha: default_alpha(),
            min_document_frequency: default_min_document_frequency(),
            field_weights: FieldWeights::default(),
            trained: false,
        }
    }
}

impl ModelSnapshot {
    /// Parse a snapshot from JSON, falling back to the untrained default if
    /// the input does not parse. Field-level damage is absorbed by the serde
    /// defaults instead.
    pub fn from_json(json: &str) -> Self {
        serde_json::from_str(json).unwrap_or_default()
    }

    /// Serialize the snapshot to JSON.
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }
}

impl SpamClassifier {
    /// Export the complete model state as plain data.
    pub fn to_snapshot(&self) -> ModelSnapshot {
        let counts = self.counts();
        ModelSnapshot {
            document_frequency: counts
                .document_frequencies()
                .map(|(t, df)| (t.to_string(), df))
                .collect(),
            feature_order: counts.feature_order().to_vec(),
            spam: ClassSnapshot::from_counts(counts.class(Label::Spam)),
            ham: ClassSnapshot::from_counts(counts.class(Label::Ham)),
            total_documents: counts.total_documents(),
            alpha: self.config().alpha,
            min_document_frequency: self.config().min_document_frequency,
            field_weights: self.config().field_weights,
            trained: self.is_trained(),
        }
    }

    /// Reconstruct a model from a snapshot, replacing all state.
    ///
    /// The vocabulary is re-derived from the snapshot's feature order and
    /// document frequencies. A snapshot claiming to be trained over zero
    /// documents comes back untrained.
    pub fn from_snapshot(snapshot: ModelSnapshot) -> Result<Self> {
        let config = ClassifierConfig {
            alpha: snapshot.alpha,
            min_document_frequency: snapshot.min_document_frequency,
            field_weights: snapshot.field_weights,
        };

        // tolerate a feature order that is missing df entries: append the
        // stragglers in sorted order so the vocabulary stays deterministic
        let mut feature_order = snapshot.feature_order;
        let known: AHashSet<String> = feature_order.iter().cloned().collect();
        for text in snapshot.document_frequency.keys() {
            if !known.contains(text) {
                feature_order.push(text.clone());
            }
        }

        let document_frequency: AHashMap<String, u64> =
            snapshot.document_frequency.into_iter().collect();
        let classes = PerLabel {
            spam: snapshot.spam.into_counts(),
            ham: snapshot.ham.into_counts(),
        };
        let total_documents = snapshot.total_documents;
        let trained = snapshot.trained && total_documents > 0;

        let counts =
            CorpusCounts::from_parts(document_frequency, feature_order, classes, total_documents);
        Self::from_state(config, counts, trained)
    }
}
