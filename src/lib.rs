//! # mailsieve
//!
//! A statistical spam classification engine for email.
//!
//! ## Features
//!
//! - Email-aware text analysis pipeline (markup stripping, URL and address
//!   reduction, Unicode tokenization)
//! - Field-aware feature extraction with per-field weighting
//! - Corpus-wide document-frequency accounting and TF-IDF weighting
//! - Two-class multinomial Naive Bayes with Laplace smoothing and
//!   numerically stable posterior normalization
//! - Deterministic plain-data model snapshots with lenient import
//!
//! ## Example
//!
//! ```
//! use mailsieve::classifier::{ClassifierConfig, SpamClassifier};
//! use mailsieve::feature::record::{EmailRecord, Label, TrainingExample};
//!
//! let corpus = vec![
//!     TrainingExample::text(Label::Spam, "win a free prize now"),
//!     TrainingExample::text(Label::Ham, "meeting notes attached"),
//! ];
//! let config = ClassifierConfig::default().with_min_document_frequency(1);
//! let model = SpamClassifier::fit(&corpus, config).unwrap();
//!
//! let prediction = model.predict_text("free prize inside").unwrap();
//! println!("{}: {:.3}", prediction.verdict, prediction.probability);
//! ```

pub mod analysis;
pub mod classifier;
pub mod cli;
pub mod error;
pub mod feature;

pub mod prelude {
    //! Convenience re-exports of the commonly used types.

    pub use crate::analysis::{Analyzer, EmailAnalyzer};
    pub use crate::classifier::{
        ClassifierConfig, ModelSnapshot, Prediction, SpamClassifier,
    };
    pub use crate::error::{MailsieveError, Result};
    pub use crate::feature::{
        EmailRecord, FeatureExtractor, FieldWeights, Label, TrainingExample, Verdict,
    };
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
