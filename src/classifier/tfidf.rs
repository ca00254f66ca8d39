//! TF-IDF weighting for classification instances.

use ahash::AHashMap;

use crate::classifier::vocabulary::CorpusCounts;
use crate::feature::extractor::{Feature, FieldWeights};

/// Computes per-instance TF-IDF weights against the trained corpus counts.
///
/// Inverse document frequency uses the smoothed form
/// `ln((N + 1) / (df + 1)) + 1`, which never collapses a known term to zero
/// weight; a term with document frequency 0 has idf 0. Term frequency is the
/// weighted occurrence count of a term divided by the instance's total
/// weighted count over terms the model has seen, so a term the corpus has
/// never seen neither scores itself nor dilutes the others.
///
/// idf reads the *unfiltered* document-frequency table; restricting terms to
/// the vocabulary is the scorer's job.
#[derive(Debug)]
pub struct TfIdfWeighter<'a> {
    counts: &'a CorpusCounts,
}

impl<'a> TfIdfWeighter<'a> {
    /// Create a weighter over trained corpus counts.
    pub fn new(counts: &'a CorpusCounts) -> Self {
        TfIdfWeighter { counts }
    }

    /// The smoothed inverse document frequency of a term.
    pub fn idf(&self, term: &str) -> f64 {
        let df = self.counts.document_frequency(term);
        if df == 0 {
            return 0.0;
        }
        let n = self.counts.total_documents() as f64;
        ((n + 1.0) / (df as f64 + 1.0)).ln() + 1.0
    }

    /// The TF-IDF weight map of one instance.
    ///
    /// Occurrences are counted with the field weights; terms with document
    /// frequency 0 are dropped before the denominator is formed. An instance
    /// with no known terms yields an empty map (the denominator never
    /// divides by zero).
    pub fn weigh(&self, features: &[Feature], weights: FieldWeights) -> AHashMap<String, f64> {
        let mut term_counts: AHashMap<&str, u64> = AHashMap::new();
        let mut total: u64 = 0;

        for feature in features {
            if self.counts.document_frequency(&feature.text) == 0 {
                continue;
            }
            let weight = weights.weight(feature.channel);
            *term_counts.entry(feature.text.as_str()).or_insert(0) += weight;
            total += weight;
        }

        let denominator = total.max(1) as f64;
        term_counts
            .into_iter()
            .map(|(term, count)| {
                let tf = count as f64 / denominator;
                (term.to_string(), tf * self.idf(term))
            })
            .collect()
    }
}
