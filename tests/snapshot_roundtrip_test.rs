//! Integration tests for snapshot export/import and training determinism.

use mailsieve::classifier::{ClassifierConfig, ModelSnapshot, SpamClassifier};
use mailsieve::error::Result;
use mailsieve::feature::record::{EmailRecord, Label, TrainingExample, Verdict};

fn corpus() -> Vec<TrainingExample> {
    vec![
        TrainingExample::email(
            Label::Spam,
            EmailRecord {
                sender_name: Some("Prize Committee".to_string()),
                sender_email: Some("win@lottery.example.net".to_string()),
                subject: Some("Win a free prize now".to_string()),
                body: Some("Click http://prizes.example.net/claim to collect your prize".to_string()),
            },
        ),
        TrainingExample::email(
            Label::Spam,
            EmailRecord {
                sender_email: Some("offers@deals.example.biz".to_string()),
                subject: Some("Free prize inside".to_string()),
                body: Some("prize prize prize".to_string()),
                ..Default::default()
            },
        ),
        TrainingExample::email(
            Label::Ham,
            EmailRecord {
                sender_name: Some("Dana Colleague".to_string()),
                sender_email: Some("dana@work.example.com".to_string()),
                subject: Some("Meeting notes".to_string()),
                body: Some("The meeting notes are attached, see you tomorrow".to_string()),
            },
        ),
        TrainingExample::text(Label::Ham, "lunch plans for friday"),
    ]
}

#[test]
fn fitting_the_same_corpus_twice_is_idempotent() -> Result<()> {
    let config = ClassifierConfig::default().with_min_document_frequency(1);

    let first = SpamClassifier::fit(&corpus(), config)?;
    let second = SpamClassifier::fit(&corpus(), config)?;

    assert_eq!(
        first.to_snapshot().to_json(false)?,
        second.to_snapshot().to_json(false)?
    );
    Ok(())
}

#[test]
fn roundtrip_predicts_identically_on_every_input() -> Result<()> {
    let config = ClassifierConfig::default().with_min_document_frequency(1);
    let model = SpamClassifier::fit(&corpus(), config)?;

    let json = model.to_snapshot().to_json(true)?;
    let restored = SpamClassifier::from_snapshot(ModelSnapshot::from_json(&json))?;

    let probes = [
        EmailRecord {
            subject: Some("free prize".to_string()),
            body: Some("prize".to_string()),
            ..Default::default()
        },
        EmailRecord {
            sender_email: Some("dana@work.example.com".to_string()),
            subject: Some("meeting tomorrow".to_string()),
            ..Default::default()
        },
        EmailRecord::default(),
    ];
    for probe in &probes {
        assert_eq!(model.predict(probe)?, restored.predict(probe)?);
    }

    for text in ["free prize now", "meeting notes attached", "", "unseen gibberish"] {
        assert_eq!(model.predict_text(text)?, restored.predict_text(text)?);
    }
    Ok(())
}

#[test]
fn roundtrip_preserves_counts_and_config() -> Result<()> {
    let config = ClassifierConfig::default()
        .with_alpha(0.5)
        .with_min_document_frequency(1);
    let model = SpamClassifier::fit(&corpus(), config)?;
    let restored = SpamClassifier::from_snapshot(model.to_snapshot())?;

    assert_eq!(restored.config().alpha, 0.5);
    assert_eq!(restored.config().min_document_frequency, 1);
    assert_eq!(
        restored.counts().total_documents(),
        model.counts().total_documents()
    );
    assert_eq!(restored.vocabulary_size(), model.vocabulary_size());
    assert_eq!(restored.is_trained(), model.is_trained());

    // a re-export of the restored model is byte-identical
    assert_eq!(
        model.to_snapshot().to_json(false)?,
        restored.to_snapshot().to_json(false)?
    );
    Ok(())
}

#[test]
fn corrupted_snapshot_degrades_to_untrained_model() -> Result<()> {
    for bad in ["", "not json at all", "[1, 2, 3]", "{\"document_frequency\": 7}"] {
        let model = SpamClassifier::from_snapshot(ModelSnapshot::from_json(bad))?;
        assert!(!model.is_trained(), "input {bad:?} must import as untrained");
        assert_eq!(model.predict_text("free prize")?.verdict, Verdict::Unknown);
    }
    Ok(())
}

#[test]
fn partially_missing_snapshot_fields_default_safely() {
    let snapshot = ModelSnapshot::from_json(r#"{"total_documents": 5, "trained": true}"#);
    assert_eq!(snapshot.total_documents, 5);
    assert!(snapshot.trained);
    assert_eq!(snapshot.alpha, 1.0);
    assert_eq!(snapshot.min_document_frequency, 2);
    assert!(snapshot.document_frequency.is_empty());
    assert!(snapshot.spam.word_counts.is_empty());
}

#[test]
fn empty_corpus_fit_imports_as_untrained() -> Result<()> {
    let model = SpamClassifier::fit(&[], ClassifierConfig::default())?;
    assert!(!model.is_trained());

    let restored = SpamClassifier::from_snapshot(model.to_snapshot())?;
    assert!(!restored.is_trained());
    assert_eq!(restored.predict_text("anything")?.verdict, Verdict::Unknown);
    Ok(())
}
