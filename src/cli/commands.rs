//! Command implementations for the mailsieve CLI.
//!
//! The core never touches storage; every file read and write lives here.

use std::fs;

use crate::classifier::{ClassifierConfig, ModelSnapshot, SpamClassifier};
use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::{MailsieveError, Result};
use crate::feature::record::{EmailRecord, Label, TrainingExample};

/// Execute a CLI command.
pub fn execute_command(args: MailsieveArgs) -> Result<()> {
    match &args.command {
        Command::Train(train_args) => train(train_args.clone(), &args),
        Command::Classify(classify_args) => classify(classify_args.clone(), &args),
        Command::Stats(stats_args) => stats(stats_args.clone(), &args),
    }
}

/// Train a model from a corpus file and write its snapshot.
fn train(args: TrainArgs, cli_args: &MailsieveArgs) -> Result<()> {
    if cli_args.verbosity() > 1 {
        println!("Loading corpus from: {}", args.corpus.display());
    }

    let corpus = load_corpus(&args.corpus)?;
    if corpus.is_empty() {
        return Err(MailsieveError::invalid_operation(
            "Corpus is empty; nothing to train on.".to_string(),
        ));
    }

    let mut config = ClassifierConfig::default();
    if let Some(alpha) = args.alpha {
        config.alpha = alpha;
    }
    if let Some(min_document_frequency) = args.min_document_frequency {
        config.min_document_frequency = min_document_frequency;
    }

    let model = SpamClassifier::fit(&corpus, config)?;
    let snapshot = model.to_snapshot();
    fs::write(&args.output, snapshot.to_json(true)?)?;

    output_result(
        "Model trained successfully",
        &TrainResult {
            model_path: args.output.to_string_lossy().to_string(),
            total_documents: model.counts().total_documents(),
            spam_documents: model.counts().class(Label::Spam).documents,
            ham_documents: model.counts().class(Label::Ham).documents,
            vocabulary_size: model.vocabulary_size(),
            tracked_features: model.counts().tracked_features(),
        },
        cli_args,
    )
}

/// Classify one email record or text string with a persisted model.
fn classify(args: ClassifyArgs, cli_args: &MailsieveArgs) -> Result<()> {
    let model = load_model(&args.model)?;

    let (prediction, top_features) = if let Some(text) = &args.text {
        let prediction = model.predict_text(text)?;
        let top_features = match args.explain {
            Some(n) => Some(model.top_features_text(text, n)?),
            None => None,
        };
        (prediction, top_features)
    } else if let Some(email_path) = &args.email {
        let record: EmailRecord = serde_json::from_str(&fs::read_to_string(email_path)?)?;
        let prediction = model.predict(&record)?;
        let top_features = match args.explain {
            Some(n) => Some(model.top_features(&record, n)?),
            None => None,
        };
        (prediction, top_features)
    } else {
        return Err(MailsieveError::invalid_operation(
            "Provide either --email <file> or --text <string>.".to_string(),
        ));
    };

    output_result(
        "Classification result",
        &ClassifyResult {
            verdict: prediction.verdict.to_string(),
            probability: prediction.probability,
            spam_score: prediction.scores.get(&Label::Spam).copied().unwrap_or(0.0),
            ham_score: prediction.scores.get(&Label::Ham).copied().unwrap_or(0.0),
            top_features,
        },
        cli_args,
    )
}

/// Show statistics of a persisted model.
fn stats(args: StatsArgs, cli_args: &MailsieveArgs) -> Result<()> {
    let model = load_model(&args.model)?;
    let config = model.config();

    output_result(
        "Model statistics",
        &ModelStats {
            trained: model.is_trained(),
            total_documents: model.counts().total_documents(),
            spam_documents: model.counts().class(Label::Spam).documents,
            ham_documents: model.counts().class(Label::Ham).documents,
            vocabulary_size: model.vocabulary_size(),
            tracked_features: model.counts().tracked_features(),
            alpha: config.alpha,
            min_document_frequency: config.min_document_frequency,
        },
        cli_args,
    )
}

/// Load a corpus file: either a JSON array of training examples or one JSON
/// object per line.
fn load_corpus(path: &std::path::Path) -> Result<Vec<TrainingExample>> {
    let contents = fs::read_to_string(path)?;

    if let Ok(corpus) = serde_json::from_str::<Vec<TrainingExample>>(&contents) {
        return Ok(corpus);
    }

    let mut corpus = Vec::new();
    for (number, line) in contents.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let example: TrainingExample = serde_json::from_str(line).map_err(|e| {
            MailsieveError::invalid_operation(format!(
                "Corpus line {} is not a training example: {e}",
                number + 1
            ))
        })?;
        corpus.push(example);
    }
    Ok(corpus)
}

/// Load a model snapshot. A snapshot that fails to parse degrades to an
/// untrained model; a missing file is still an error.
fn load_model(path: &std::path::Path) -> Result<SpamClassifier> {
    let contents = fs::read_to_string(path)?;
    SpamClassifier::from_snapshot(ModelSnapshot::from_json(&contents))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_corpus_json_array() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"label": "spam", "text": "win prize"}}, {{"label": "ham", "text": "meeting"}}]"#
        )
        .unwrap();

        let corpus = load_corpus(file.path()).unwrap();
        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus[0].label, Label::Spam);
    }

    #[test]
    fn test_load_corpus_json_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, r#"{{"label": "spam", "emailData": {{"subject": "Win"}}}}"#).unwrap();
        writeln!(file).unwrap();
        writeln!(file, r#"{{"label": "ham", "text": "meeting notes"}}"#).unwrap();

        let corpus = load_corpus(file.path()).unwrap();
        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus[1].label, Label::Ham);
    }

    #[test]
    fn test_load_corpus_rejects_garbage_line() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "not json").unwrap();

        assert!(load_corpus(file.path()).is_err());
    }

    #[test]
    fn test_load_model_corrupted_snapshot_is_untrained() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ corrupted").unwrap();

        let model = load_model(file.path()).unwrap();
        assert!(!model.is_trained());
    }
}
