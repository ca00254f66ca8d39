//! Email records, class labels, and training corpus types.
//!
//! The classifier works over exactly two classes. [`Label`] is the closed
//! training/ground-truth label set; [`Verdict`] extends it with the
//! `Unknown` sentinel returned when predicting on an untrained model.
//!
//! # Examples
//!
//! ```
//! use mailsieve::feature::record::{EmailRecord, Label, TrainingExample};
//!
//! let example = TrainingExample::email(
//!     Label::Spam,
//!     EmailRecord {
//!         subject: Some("Win a free prize now".to_string()),
//!         body: Some("prize prize click".to_string()),
//!         ..Default::default()
//!     },
//! );
//! assert_eq!(example.label, Label::Spam);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// The two message classes the model distinguishes.
///
/// The class set is closed: the posterior normalization in the classifier is
/// written for exactly two classes and does not generalize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    /// Unsolicited bulk mail.
    Spam,
    /// Legitimate mail.
    Ham,
}

impl Label {
    /// Both labels, in a fixed order.
    pub const ALL: [Label; 2] = [Label::Spam, Label::Ham];

    /// The label as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Spam => "spam",
            Label::Ham => "ham",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classification outcome: one of the two labels, or `Unknown` when the
/// model has never been fitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    /// Classified as spam.
    Spam,
    /// Classified as ham.
    Ham,
    /// The model is untrained; no classification was made.
    Unknown,
}

impl Verdict {
    /// The verdict as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Spam => "spam",
            Verdict::Ham => "ham",
            Verdict::Unknown => "unknown",
        }
    }
}

impl From<Label> for Verdict {
    fn from(label: Label) -> Self {
        match label {
            Label::Spam => Verdict::Spam,
            Label::Ham => Verdict::Ham,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One value per class label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerLabel<T> {
    pub spam: T,
    pub ham: T,
}

impl<T> PerLabel<T> {
    /// Get the value for a label.
    pub fn get(&self, label: Label) -> &T {
        match label {
            Label::Spam => &self.spam,
            Label::Ham => &self.ham,
        }
    }

    /// Get the mutable value for a label.
    pub fn get_mut(&mut self, label: Label) -> &mut T {
        match label {
            Label::Spam => &mut self.spam,
            Label::Ham => &mut self.ham,
        }
    }
}

/// A structured email record.
///
/// All fields are optional; missing fields contribute no features.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmailRecord {
    /// Display name of the sender.
    pub sender_name: Option<String>,
    /// Email address of the sender.
    pub sender_email: Option<String>,
    /// Message subject line.
    pub subject: Option<String>,
    /// Message body (plain text or markup).
    pub body: Option<String>,
}

/// The content side of a training example: either a structured email record
/// or a legacy plain-text document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TrainingContent {
    /// Structured email record, field-aware extraction.
    Email {
        #[serde(rename = "emailData")]
        email_data: EmailRecord,
    },
    /// Plain text, tokenized as a whole without field prefixing.
    Text { text: String },
}

/// One labeled document of the training corpus.
///
/// Serializes as `{"label": "spam", "emailData": {...}}` or
/// `{"label": "ham", "text": "..."}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingExample {
    /// Ground-truth class of the document.
    pub label: Label,
    /// Document content.
    #[serde(flatten)]
    pub content: TrainingContent,
}

impl TrainingExample {
    /// Create a structured training example.
    pub fn email(label: Label, email_data: EmailRecord) -> Self {
        TrainingExample {
            label,
            content: TrainingContent::Email { email_data },
        }
    }

    /// Create a legacy plain-text training example.
    pub fn text<S: Into<String>>(label: Label, text: S) -> Self {
        TrainingExample {
            label,
            content: TrainingContent::Text { text: text.into() },
        }
    }
}
