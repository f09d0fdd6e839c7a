//! Benchmarks for the phonetic encoders and the stemmer.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use libstrmatch::phonetic::{match_rating_comparison, Encoder};
use libstrmatch::stemmer::Stemmer;

const NAMES: &[&str] = &[
    "Robert",
    "Thompson",
    "Macintosh",
    "Schwarzenegger",
    "Phillipson",
    "Knight",
    "Catherine",
    "Washington",
];

const WORDS: &[&str] = &[
    "running",
    "relational",
    "generalization",
    "hopefulness",
    "caresses",
    "adjustable",
];

fn bench_encoders(c: &mut Criterion) {
    let mut group = c.benchmark_group("phonetic/encode");
    let bytes: usize = NAMES.iter().map(|n| n.len()).sum();
    group.throughput(Throughput::Bytes(bytes as u64));

    for encoder in Encoder::ALL {
        group.bench_with_input(
            BenchmarkId::from_parameter(encoder),
            &encoder,
            |b, encoder| {
                b.iter(|| {
                    for name in NAMES {
                        black_box(encoder.encode(black_box(name)));
                    }
                });
            },
        );
    }

    group.finish();
}

fn bench_match_rating_comparison(c: &mut Criterion) {
    c.bench_function("phonetic/match_rating_comparison", |b| {
        b.iter(|| {
            for pair in NAMES.windows(2) {
                black_box(match_rating_comparison(black_box(pair[0]), black_box(pair[1])));
            }
        });
    });
}

fn bench_stemmer(c: &mut Criterion) {
    let mut group = c.benchmark_group("stemmer");

    group.bench_function("stem_word", |b| {
        let mut stemmer = Stemmer::new();
        b.iter(|| {
            for word in WORDS {
                black_box(stemmer.stem_word(black_box(word)));
            }
        });
    });

    group.bench_function("stem_in_place", |b| {
        let mut stemmer = Stemmer::new();
        let mut buf = [0u8; 32];
        b.iter(|| {
            for word in WORDS {
                buf[..word.len()].copy_from_slice(word.as_bytes());
                black_box(stemmer.stem(&mut buf, word.len()).ok());
            }
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_encoders,
    bench_match_rating_comparison,
    bench_stemmer,
);
criterion_main!(benches);
