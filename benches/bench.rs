//! Criterion benchmarks for Falcata.
//!
//! Covers the three hot paths of the classifier:
//! - Feature extraction (tokenization, stemming, filtering)
//! - Training
//! - Classification and snapshot encoding

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use falcata::analysis::analyzer::{Analyzer, BayesAnalyzer};
use falcata::classifier::NaiveBayesClassifier;
use falcata::persistence::SnapshotFormat;
use std::hint::black_box;

const CATEGORIES: [&str; 4] = ["search", "learning", "storage", "network"];

/// Generate test documents for benchmarking.
fn generate_test_documents(count: usize) -> Vec<String> {
    let words = vec![
        "search",
        "engines",
        "indexing",
        "queries",
        "documents",
        "relevance",
        "machine",
        "learning",
        "training",
        "classifiers",
        "features",
        "probability",
        "storage",
        "segments",
        "compaction",
        "checksums",
        "snapshots",
        "network",
        "packets",
        "routing",
        "latency",
        "throughput",
        "connections",
        "protocols",
    ];

    let mut documents = Vec::with_capacity(count);

    for i in 0..count {
        let doc_length = 20 + (i % 30);
        let mut doc_words = Vec::with_capacity(doc_length);

        for j in 0..doc_length {
            let word_idx = (i * 7 + j * 13) % words.len(); // Pseudo-random distribution
            doc_words.push(words[word_idx]);
        }

        documents.push(format!("{}!", doc_words.join(" ")));
    }

    documents
}

fn trained_classifier(documents: &[String]) -> NaiveBayesClassifier {
    let mut classifier = NaiveBayesClassifier::new(CATEGORIES).unwrap();
    let batch = documents
        .iter()
        .enumerate()
        .map(|(i, text)| (CATEGORIES[i % CATEGORIES.len()], text.as_str()));
    classifier.train_batch(batch).unwrap();
    classifier
}

/// Benchmark feature extraction.
fn bench_feature_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("feature_extraction");

    let analyzer = BayesAnalyzer::new().unwrap();
    let texts = generate_test_documents(1000);

    group.bench_function("features_single_document", |b| {
        b.iter(|| {
            let result = analyzer.features(black_box(&texts[0]));
            black_box(result)
        })
    });

    group.throughput(Throughput::Elements(100));
    group.bench_function("features_batch_documents", |b| {
        b.iter(|| {
            for text in texts.iter().take(100) {
                let _ = black_box(analyzer.features(black_box(text)));
            }
        })
    });

    group.finish();
}

/// Benchmark training.
fn bench_training(c: &mut Criterion) {
    let mut group = c.benchmark_group("training");
    let texts = generate_test_documents(100);

    group.throughput(Throughput::Elements(texts.len() as u64));
    group.bench_function("train_100_documents", |b| {
        b.iter_with_setup(
            || NaiveBayesClassifier::new(CATEGORIES).unwrap(),
            |mut classifier| {
                for (i, text) in texts.iter().enumerate() {
                    classifier
                        .train(CATEGORIES[i % CATEGORIES.len()], black_box(text))
                        .unwrap();
                }
                black_box(classifier)
            },
        )
    });

    group.finish();
}

/// Benchmark classification and snapshots.
fn bench_classification(c: &mut Criterion) {
    let mut group = c.benchmark_group("classification");

    let texts = generate_test_documents(1000);
    let classifier = trained_classifier(&texts);

    group.bench_function("classify_single_document", |b| {
        b.iter(|| black_box(classifier.classify(black_box(&texts[1])).unwrap()))
    });

    group.bench_function("classify_label", |b| {
        b.iter(|| black_box(classifier.classify_label(black_box(&texts[2])).unwrap()))
    });

    for format in [SnapshotFormat::Binary, SnapshotFormat::Json] {
        group.bench_function(format!("encode_{format:?}").to_lowercase(), |b| {
            b.iter(|| black_box(classifier.to_bytes(format).unwrap()))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_feature_extraction,
    bench_training,
    bench_classification
);

criterion_main!(benches);
