//! Benchmarks for the distance and similarity functions.
//!
//! Pairs cover record-linkage names, typo-sized edits, transpositions,
//! non-ASCII input and inputs long enough to spill the 32-char inline buffer.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use libstrmatch::distance::*;
use libstrmatch::similarity::{jaro_distance, jaro_winkler};

/// `(label, left, right)` pairs shared by every group.
fn name_pairs() -> Vec<(&'static str, &'static str, &'static str)> {
    vec![
        ("empty", "", ""),
        ("equal_name", "Smith", "Smith"),
        ("vowel_swap", "Smith", "Smyth"),
        ("unrelated_names", "Jones", "Okafor"),
        ("kitten", "kitten", "sitting"),
        ("dropped_letter", "Dixon", "Dickson"),
        ("split_name", "Dwayne", "Duane"),
        ("swapped_pair", "MARTHA", "MARHTA"),
        ("reversed_middle", "abcdef", "acbdfe"),
        ("accented", "Zoë Müller", "Zoe Mueller"),
        ("cjk", "東京都庁", "東京都廳"),
        (
            "long_address",
            "1600 Pennsylvania Avenue Northwest, Washington",
            "1600 Pennsylvania Ave NW, Washington DC",
        ),
        (
            "long_unrelated",
            "International Business Machines Corporation",
            "General Electric Company of New York",
        ),
    ]
}

fn bench_pairs<F>(c: &mut Criterion, group_name: &str, f: F)
where
    F: Fn(&str, &str) -> f64,
{
    let mut group = c.benchmark_group(group_name);

    for (name, source, target) in name_pairs() {
        let size = source.len() + target.len();
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(name),
            &(source, target),
            |b, &(s, t)| {
                b.iter(|| f(black_box(s), black_box(t)));
            },
        );
    }

    group.finish();
}

// ============================================================================
// Edit Distances
// ============================================================================

fn bench_levenshtein(c: &mut Criterion) {
    bench_pairs(c, "levenshtein_distance", |s, t| {
        levenshtein_distance(s, t) as f64
    });
}

fn bench_damerau_levenshtein(c: &mut Criterion) {
    bench_pairs(c, "damerau_levenshtein_distance", |s, t| {
        damerau_levenshtein_distance(s, t) as f64
    });
}

fn bench_true_damerau_levenshtein(c: &mut Criterion) {
    bench_pairs(c, "true_damerau_levenshtein_distance", |s, t| {
        true_damerau_levenshtein_distance(s, t) as f64
    });
}

fn bench_hamming(c: &mut Criterion) {
    bench_pairs(c, "hamming_distance_padded", |s, t| {
        hamming_distance_padded(s, t) as f64
    });
}

// ============================================================================
// Similarity
// ============================================================================

fn bench_jaro(c: &mut Criterion) {
    bench_pairs(c, "jaro_distance", jaro_distance);
}

fn bench_jaro_winkler(c: &mut Criterion) {
    bench_pairs(c, "jaro_winkler/long_tolerance", |s, t| {
        jaro_winkler(s, t, true)
    });
}

// ============================================================================
// Scaling
// ============================================================================

fn bench_length_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("levenshtein_distance/scaling");

    for len in [8, 32, 64, 256] {
        let source: String = "abcdefgh".chars().cycle().take(len).collect();
        let target: String = "abcdefhg".chars().cycle().take(len).collect();
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(len),
            &(source, target),
            |b, (s, t)| {
                b.iter(|| levenshtein_distance(black_box(s), black_box(t)));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_levenshtein,
    bench_damerau_levenshtein,
    bench_true_damerau_levenshtein,
    bench_hamming,
    bench_jaro,
    bench_jaro_winkler,
    bench_length_scaling,
);
criterion_main!(benches);
