//! Performance benchmarks for Preprocessor
//!
//! Run with: cargo bench --bench preprocess_benchmarks

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use plagprep_engine::{
    Language, PreprocessConfig, Preprocessor, PretaggedTagger, SourceDocument, TaggedSentence,
    TaggedToken,
};
use std::hint::black_box;

const WORDS: [&str; 12] = [
    "river", "flows", "into", "the", "sea", "while", "students", "write", "long", "essays",
    "about", "it",
];

/// Generate a document of `sentences` sentences together with its tagger output
///
/// Every fourth sentence is a single word so the merge pass has work to do.
fn generate_document(seed: usize, sentences: usize) -> (String, Vec<TaggedSentence>) {
    let mut text = String::new();
    let mut tagged = Vec::with_capacity(sentences);

    for s in 0..sentences {
        let length = if s % 4 == 0 { 1 } else { 6 + (seed + s) % 5 };
        let mut tokens = Vec::with_capacity(length + 1);
        for w in 0..length {
            let word = WORDS[(seed + s * 7 + w) % WORDS.len()];
            let start = text.chars().count();
            text.push_str(word);
            tokens.push(TaggedToken::new(word, "X", word, start, start + word.len()));
            text.push(' ');
        }
        text.pop();
        let dot = text.chars().count();
        text.push_str(". ");
        tokens.push(TaggedToken::punctuation(".", dot, dot + 1));
        tagged.push(TaggedSentence::new(tokens));
    }

    (text, tagged)
}

fn generate_corpus(documents: usize, sentences: usize) -> (Vec<SourceDocument>, PretaggedTagger) {
    let mut tagger = PretaggedTagger::new(Language::English);
    let mut sources = Vec::with_capacity(documents);
    for d in 0..documents {
        let (text, tagged) = generate_document(d, sentences);
        tagger.insert(text.clone(), tagged).unwrap();
        sources.push(SourceDocument::new(format!("doc{d}"), text));
    }
    (sources, tagger)
}

/// Benchmark document sizes
fn bench_document_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("document_sizes");
    let preprocessor =
        Preprocessor::with_config(Language::English, PreprocessConfig::sequential()).unwrap();

    for sentences in [10, 100, 1_000] {
        let (sources, tagger) = generate_corpus(1, sentences);

        group.throughput(Throughput::Elements(sentences as u64));
        group.bench_with_input(
            BenchmarkId::new("sentences", sentences),
            &sources,
            |b, sources| {
                b.iter(|| {
                    let _ = preprocessor
                        .preprocess(black_box(sources), &[], &tagger)
                        .unwrap();
                });
            },
        );
    }

    group.finish();
}

/// Benchmark worker pool sizes over a fixed corpus
fn bench_thread_counts(c: &mut Criterion) {
    let mut group = c.benchmark_group("thread_counts");
    let (sources, tagger) = generate_corpus(64, 200);

    for threads in [1, 2, 4, 8] {
        let config = PreprocessConfig {
            threads: Some(threads),
            ..PreprocessConfig::parallel()
        };
        let preprocessor = Preprocessor::with_config(Language::English, config).unwrap();

        group.throughput(Throughput::Elements(sources.len() as u64));
        group.bench_with_input(BenchmarkId::new("threads", threads), &sources, |b, sources| {
            b.iter(|| {
                let _ = preprocessor
                    .preprocess(black_box(sources), &[], &tagger)
                    .unwrap();
            });
        });
    }

    group.finish();
}

/// Benchmark common-sentence detection against growing reference sets
fn bench_reference_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("reference_sizes");
    let preprocessor =
        Preprocessor::with_config(Language::English, PreprocessConfig::sequential()).unwrap();

    for reference_docs in [0, 4, 16] {
        let (sources, mut tagger) = generate_corpus(4, 100);
        let mut references = Vec::with_capacity(reference_docs);
        for r in 0..reference_docs {
            let (text, tagged) = generate_document(1_000 + r, 20);
            tagger.insert(text.clone(), tagged).unwrap();
            references.push(SourceDocument::new(format!("ref{r}"), text));
        }

        group.bench_with_input(
            BenchmarkId::new("references", reference_docs),
            &references,
            |b, references| {
                b.iter(|| {
                    let _ = preprocessor
                        .preprocess(black_box(&sources), references, &tagger)
                        .unwrap();
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_document_sizes,
    bench_thread_counts,
    bench_reference_sizes
);
criterion_main!(benches);
