//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{MailsieveArgs, OutputFormat};
use crate::error::Result;

/// Result structure for training.
#[derive(Debug, Serialize, Deserialize)]
pub struct TrainResult {
    pub model_path: String,
    pub total_documents: u64,
    pub spam_documents: u64,
    pub ham_documents: u64,
    pub vocabulary_size: usize,
    pub tracked_features: usize,
}

/// Result structure for classification.
#[derive(Debug, Serialize, Deserialize)]
pub struct ClassifyResult {
    pub verdict: String,
    pub probability: f64,
    pub spam_score: f64,
    pub ham_score: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_features: Option<Vec<(String, f64)>>,
}

/// Model statistics.
#[derive(Debug, Serialize, Deserialize)]
pub struct ModelStats {
    pub trained: bool,
    pub total_documents: u64,
    pub spam_documents: u64,
    pub ham_documents: u64,
    pub vocabulary_size: usize,
    pub tracked_features: usize,
    pub alpha: f64,
    pub min_document_frequency: u64,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &MailsieveArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format: the message followed by the result's
/// fields as an indented key/value listing.
fn output_human<T: Serialize>(message: &str, result: &T, args: &MailsieveArgs) -> Result<()> {
    if args.verbosity() > 0 {
        println!("{message}");
    }

    let value = serde_json::to_value(result)?;
    if let Some(object) = value.as_object() {
        for (key, field) in object {
            match field {
                serde_json::Value::Array(entries) => {
                    println!("  {key}:");
                    for entry in entries {
                        println!("    {entry}");
                    }
                }
                other => println!("  {key}: {other}"),
            }
        }
    } else {
        println!("  {value}");
    }

    Ok(())
}

/// Output as JSON.
fn output_json<T: Serialize>(result: &T, args: &MailsieveArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    println!("{json}");
    Ok(())
}
