//! Error types for the mailsieve library.
//!
//! All fallible operations in the crate return [`Result`], whose error type is
//! the [`MailsieveError`] enum. Note that the classification engine itself is
//! designed around soft failures (see the untrained sentinel and the lenient
//! snapshot import); `Result` is reserved for genuine pipeline failures such as
//! invalid regex patterns or host-side I/O.
//!
//! # Examples
//!
//! ```
//! use mailsieve::error::{MailsieveError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(MailsieveError::analysis("invalid tokenizer pattern"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {e}"),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for mailsieve operations.
#[derive(Error, Debug)]
pub enum MailsieveError {
    /// I/O errors (corpus files, snapshot files).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis-related errors (char filtering, tokenization).
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Feature extraction errors.
    #[error("Feature error: {0}")]
    Feature(String),

    /// Model training or prediction errors.
    #[error("Model error: {0}")]
    Model(String),

    /// Snapshot export/import errors.
    #[error("Snapshot error: {0}")]
    Snapshot(String),

    /// Invalid operation
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with MailsieveError.
pub type Result<T> = std::result::Result<T, MailsieveError>;

impl MailsieveError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        MailsieveError::Analysis(msg.into())
    }

    /// Create a new feature extraction error.
    pub fn feature<S: Into<String>>(msg: S) -> Self {
        MailsieveError::Feature(msg.into())
    }

    /// Create a new model error.
    pub fn model<S: Into<String>>(msg: S) -> Self {
        MailsieveError::Model(msg.into())
    }

    /// Create a new snapshot error.
    pub fn snapshot<S: Into<String>>(msg: S) -> Self {
        MailsieveError::Snapshot(msg.into())
    }

    /// Create a new invalid operation error.
    pub fn invalid_operation<S: Into<String>>(msg: S) -> Self {
        MailsieveError::InvalidOperation(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        MailsieveError::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = MailsieveError::analysis("Test analysis error");
        assert_eq!(error.to_string(), "Analysis error: Test analysis error");

        let error = MailsieveError::model("Test model error");
        assert_eq!(error.to_string(), "Model error: Test model error");

        let error = MailsieveError::snapshot("Test snapshot error");
        assert_eq!(error.to_string(), "Snapshot error: Test snapshot error");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let mailsieve_error = MailsieveError::from(io_error);

        match mailsieve_error {
            MailsieveError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
