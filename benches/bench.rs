//! Criterion benchmarks for the mailsieve classification engine.
//!
//! Covers the stages a high-volume host exercises: text analysis, feature
//! extraction, corpus fitting, and per-message prediction.

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

use mailsieve::analysis::analyzer::Analyzer;
use mailsieve::analysis::analyzer::email::EmailAnalyzer;
use mailsieve::classifier::{ClassifierConfig, SpamClassifier};
use mailsieve::feature::extractor::FeatureExtractor;
use mailsieve::feature::record::{EmailRecord, Label, TrainingExample};

/// Generate synthetic email records for benchmarking.
fn generate_corpus(count: usize) -> Vec<TrainingExample> {
    let spam_words = [
        "free", "prize", "winner", "claim", "urgent", "offer", "bonus", "cash", "click",
        "limited", "exclusive", "deal", "guarantee", "million", "lottery",
    ];
    let ham_words = [
        "meeting", "notes", "attached", "schedule", "project", "review", "report", "tomorrow",
        "lunch", "agenda", "deadline", "invoice", "update", "thanks", "regards",
    ];

    let mut corpus = Vec::with_capacity(count);
    for i in 0..count {
        let (label, words, domain) = if i % 2 == 0 {
            (Label::Spam, &spam_words, "deals.example.biz")
        } else {
            (Label::Ham, &ham_words, "work.example.com")
        };

        let body_length = 30 + (i % 60);
        let mut body_words = Vec::with_capacity(body_length);
        for j in 0..body_length {
            body_words.push(words[(i * 7 + j * 13) % words.len()]);
        }

        corpus.push(TrainingExample::email(
            label,
            EmailRecord {
                sender_name: Some(format!("Sender {i}")),
                sender_email: Some(format!("user{i}@{domain}")),
                subject: Some(format!(
                    "{} {} {}",
                    words[i % words.len()],
                    words[(i + 3) % words.len()],
                    words[(i + 6) % words.len()]
                )),
                body: Some(body_words.join(" ")),
            },
        ));
    }
    corpus
}

fn bench_text_analysis(c: &mut Criterion) {
    let analyzer = EmailAnalyzer::new().unwrap();
    let body = "You WON a free prize! Claim at http://prizes.example.net/now?id=7 \
                or write to winner@lottery.example.net before <b>midnight</b> tonight"
        .repeat(4);

    let mut group = c.benchmark_group("text_analysis");
    group.throughput(Throughput::Bytes(body.len() as u64));
    group.bench_function("analyze_email_body", |b| {
        b.iter(|| {
            let tokens: Vec<_> = analyzer.analyze(black_box(&body)).unwrap().collect();
            black_box(tokens)
        });
    });
    group.finish();
}

fn bench_feature_extraction(c: &mut Criterion) {
    let extractor = FeatureExtractor::new().unwrap();
    let record = EmailRecord {
        sender_name: Some("Prize Committee".to_string()),
        sender_email: Some("winner@lottery.example.net".to_string()),
        subject: Some("Win a free prize now".to_string()),
        body: Some("Claim your exclusive prize at http://prizes.example.net/claim today".repeat(8)),
    };

    let mut group = c.benchmark_group("feature_extraction");
    group.bench_function("extract_record", |b| {
        b.iter(|| black_box(extractor.extract(black_box(&record)).unwrap()));
    });
    group.finish();
}

fn bench_training(c: &mut Criterion) {
    let corpus = generate_corpus(200);
    let config = ClassifierConfig::default();

    let mut group = c.benchmark_group("training");
    group.throughput(Throughput::Elements(corpus.len() as u64));
    group.bench_function("fit_200_documents", |b| {
        b.iter(|| black_box(SpamClassifier::fit(black_box(&corpus), config).unwrap()));
    });
    group.finish();
}

fn bench_prediction(c: &mut Criterion) {
    let corpus = generate_corpus(200);
    let model = SpamClassifier::fit(&corpus, ClassifierConfig::default()).unwrap();
    let record = EmailRecord {
        sender_email: Some("offers@deals.example.biz".to_string()),
        subject: Some("Exclusive free prize offer".to_string()),
        body: Some("Claim your bonus cash prize now, limited offer".repeat(6)),
        ..Default::default()
    };

    let mut group = c.benchmark_group("prediction");
    group.bench_function("predict_record", |b| {
        b.iter(|| black_box(model.predict(black_box(&record)).unwrap()));
    });
    group.bench_function("top_features", |b| {
        b.iter(|| black_box(model.top_features(black_box(&record), 10).unwrap()));
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_text_analysis,
    bench_feature_extraction,
    bench_training,
    bench_prediction
);
criterion_main!(benches);
