//! Field-aware feature extraction.
//!
//! An [`EmailRecord`] is turned into an ordered multiset of [`Feature`]s.
//! Each field feeds its own channel:
//!
//! - sender name tokens are prefixed `name_`;
//! - the sender address contributes one `domain_<domain>` and one
//!   `tld_<last label>` feature (the local part is never tokenized);
//! - subject and body tokens are emitted bare and share one vocabulary space.
//!
//! Channel emphasis is expressed through [`FieldWeights`] rather than
//! duplicate emission: every place occurrence multiplicity is counted
//! (per-class word counts, term frequency) multiplies by the channel's
//! weight. The default table weights subject tokens twice as heavily as body
//! tokens. Document frequency is per distinct feature text and ignores the
//! weights.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::email::EmailAnalyzer;
use crate::error::Result;
use crate::feature::record::EmailRecord;

/// The channel a feature was extracted from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldChannel {
    /// Sender display name token.
    SenderName,
    /// Sender address domain.
    SenderDomain,
    /// Sender address top-level domain.
    SenderTld,
    /// Subject token.
    Subject,
    /// Body token.
    Body,
}

/// A single extracted feature: prefixed or bare text plus its channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feature {
    /// The feature string as it appears in the vocabulary.
    pub text: String,
    /// The channel the feature came from.
    pub channel: FieldChannel,
}

impl Feature {
    /// Create a new feature.
    pub fn new<S: Into<String>>(text: S, channel: FieldChannel) -> Self {
        Feature {
            text: text.into(),
            channel,
        }
    }
}

/// Per-field occurrence multipliers.
///
/// Applied wherever multiplicity is counted: per-class word counts at
/// training time and term frequency at prediction time, numerator and
/// denominator alike. The default doubles subject tokens relative to body
/// tokens; sender-channel features (name, domain, tld) count once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldWeights {
    /// Multiplier for sender name, domain, and tld features.
    pub sender: u32,
    /// Multiplier for subject tokens.
    pub subject: u32,
    /// Multiplier for body tokens.
    pub body: u32,
}

impl Default for FieldWeights {
    fn default() -> Self {
        FieldWeights {
            sender: 1,
            subject: 2,
            body: 1,
        }
    }
}

impl FieldWeights {
    /// The multiplier for a channel.
    pub fn weight(&self, channel: FieldChannel) -> u64 {
        let weight = match channel {
            FieldChannel::SenderName | FieldChannel::SenderDomain | FieldChannel::SenderTld => {
                self.sender
            }
            FieldChannel::Subject => self.subject,
            FieldChannel::Body => self.body,
        };
        u64::from(weight)
    }
}

/// Turns email records into feature multisets using an [`Analyzer`].
///
/// Duplicates are preserved; multiplicity matters for term frequency.
/// Missing fields contribute nothing.
///
/// # Examples
///
/// ```
/// use mailsieve::feature::extractor::FeatureExtractor;
/// use mailsieve::feature::record::EmailRecord;
///
/// let extractor = FeatureExtractor::new().unwrap();
/// let record = EmailRecord {
///     sender_email: Some("deals@promo.example.com".to_string()),
///     subject: Some("free prize".to_string()),
///     ..Default::default()
/// };
/// let features = extractor.extract(&record).unwrap();
/// let texts: Vec<_> = features.iter().map(|f| f.text.as_str()).collect();
/// assert_eq!(
///     texts,
///     vec!["domain_promo.example.com", "tld_com", "free", "prize"]
/// );
/// ```
#[derive(Clone)]
pub struct FeatureExtractor {
    analyzer: Arc<dyn Analyzer>,
}

impl FeatureExtractor {
    /// Create an extractor over the default [`EmailAnalyzer`].
    pub fn new() -> Result<Self> {
        Ok(FeatureExtractor {
            analyzer: Arc::new(EmailAnalyzer::new()?),
        })
    }

    /// Create an extractor over a custom analyzer.
    pub fn with_analyzer(analyzer: Arc<dyn Analyzer>) -> Self {
        FeatureExtractor { analyzer }
    }

    /// Extract the ordered feature multiset of a structured record.
    pub fn extract(&self, record: &EmailRecord) -> Result<Vec<Feature>> {
        let mut features = Vec::new();

        if let Some(sender_name) = &record.sender_name {
            for token in self.analyzer.analyze(sender_name)? {
                features.push(Feature::new(
                    format!("name_{}", token.text),
                    FieldChannel::SenderName,
                ));
            }
        }

        if let Some(sender_email) = &record.sender_email {
            Self::extract_address(sender_email, &mut features);
        }

        if let Some(subject) = &record.subject {
            for token in self.analyzer.analyze(subject)? {
                features.push(Feature::new(token.text, FieldChannel::Subject));
            }
        }

        if let Some(body) = &record.body {
            for token in self.analyzer.analyze(body)? {
                features.push(Feature::new(token.text, FieldChannel::Body));
            }
        }

        Ok(features)
    }

    /// Extract a legacy plain-text document as bare body-channel features.
    pub fn extract_text(&self, text: &str) -> Result<Vec<Feature>> {
        let mut features = Vec::new();
        for token in self.analyzer.analyze(text)? {
            features.push(Feature::new(token.text, FieldChannel::Body));
        }
        Ok(features)
    }

    /// Domain and tld features of a sender address. The local part is never
    /// tokenized. A malformed address contributes nothing.
    fn extract_address(sender_email: &str, features: &mut Vec<Feature>) {
        let Some((_, domain)) = sender_email.rsplit_once('@') else {
            return;
        };
        let domain = domain.trim().trim_matches('>').to_lowercase();
        if domain.is_empty() {
            return;
        }

        features.push(Feature::new(
            format!("domain_{domain}"),
            FieldChannel::SenderDomain,
        ));

        if let Some((_, tld)) = domain.rsplit_once('.')
            && !tld.is_empty()
        {
            features.push(Feature::new(format!("tld_{tld}"), FieldChannel::SenderTld));
        }
    }
}

impl std::fmt::Debug for FeatureExtractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeatureExtractor")
            .field("analyzer", &self.analyzer.name())
            .finish()
    }
}
