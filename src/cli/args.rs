//! Command line argument parsing for the mailsieve CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// mailsieve - statistical spam classification for email
#[derive(Parser, Debug, Clone)]
#[command(name = "mailsieve")]
#[command(about = "A statistical spam classification engine for email")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct MailsieveArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl MailsieveArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Train a model from a labeled corpus
    Train(TrainArgs),

    /// Classify an email with a trained model
    Classify(ClassifyArgs),

    /// Show model statistics
    Stats(StatsArgs),
}

/// Arguments for training a model
#[derive(Parser, Debug, Clone)]
pub struct TrainArgs {
    /// Corpus file: a JSON array of training examples, or JSON Lines
    #[arg(value_name = "CORPUS_FILE")]
    pub corpus: PathBuf,

    /// Path to write the model snapshot to
    #[arg(short, long, value_name = "MODEL_FILE")]
    pub output: PathBuf,

    /// Laplace smoothing constant
    #[arg(long)]
    pub alpha: Option<f64>,

    /// Minimum document frequency for vocabulary membership
    #[arg(long = "min-df")]
    pub min_document_frequency: Option<u64>,
}

/// Arguments for classifying an email
#[derive(Parser, Debug, Clone)]
pub struct ClassifyArgs {
    /// Model snapshot file
    #[arg(value_name = "MODEL_FILE")]
    pub model: PathBuf,

    /// JSON file containing one email record
    #[arg(long, value_name = "EMAIL_FILE", conflicts_with = "text")]
    pub email: Option<PathBuf>,

    /// Classify a raw text string instead of a record
    #[arg(long)]
    pub text: Option<String>,

    /// Include the top N contributing features in the output
    #[arg(long, value_name = "N")]
    pub explain: Option<usize>,
}

/// Arguments for showing model statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Model snapshot file
    #[arg(value_name = "MODEL_FILE")]
    pub model: PathBuf,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_defaults_to_normal() {
        let args = MailsieveArgs::parse_from(["mailsieve", "stats", "model.json"]);
        assert_eq!(args.verbosity(), 1);
    }

    #[test]
    fn test_quiet_overrides_verbose() {
        let args = MailsieveArgs::parse_from(["mailsieve", "-q", "-vv", "stats", "model.json"]);
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_train_args() {
        let args = MailsieveArgs::parse_from([
            "mailsieve",
            "train",
            "corpus.jsonl",
            "--output",
            "model.json",
            "--alpha",
            "0.5",
            "--min-df",
            "1",
        ]);
        match args.command {
            Command::Train(train) => {
                assert_eq!(train.alpha, Some(0.5));
                assert_eq!(train.min_document_frequency, Some(1));
            }
            _ => panic!("Expected train command"),
        }
    }

    #[test]
    fn test_classify_text_flag() {
        let args = MailsieveArgs::parse_from([
            "mailsieve",
            "classify",
            "model.json",
            "--text",
            "free prize",
            "--explain",
            "5",
        ]);
        match args.command {
            Command::Classify(classify) => {
                assert_eq!(classify.text.as_deref(), Some("free prize"));
                assert_eq!(classify.explain, Some(5));
            }
            _ => panic!("Expected classify command"),
        }
    }
}
