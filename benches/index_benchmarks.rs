//! Benchmarks for index construction and the repeated-substring query.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use suffix_index::prelude::*;

/// Generate a pseudo-random text of the given size over a small alphabet.
///
/// A fixed multiplicative generator keeps runs comparable without pulling
/// in a random-number dependency.
fn generate_text(size: usize, alphabet: u8) -> Text {
    let mut state = 0x2545F4914F6CDD1Du64;
    let symbols = (0..size)
        .map(|_| {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            (state >> 33) as u8 % alphabet + 1
        })
        .collect();
    Text::new(symbols, alphabet).expect("generated symbols stay in bounds")
}

/// Benchmark: construction of each structure over growing texts
fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");

    for size in [100, 1_000, 10_000, 100_000].iter() {
        let text = generate_text(*size, 4);
        group.throughput(Throughput::Bytes(*size as u64));

        group.bench_with_input(BenchmarkId::new("automaton", size), size, |b, _| {
            b.iter(|| black_box(SuffixAutomaton::build(black_box(&text))));
        });
        group.bench_with_input(BenchmarkId::new("suffix_array", size), size, |b, _| {
            b.iter(|| black_box(SuffixArray::build(black_box(&text))));
        });
        group.bench_with_input(BenchmarkId::new("suffix_tree", size), size, |b, _| {
            b.iter(|| black_box(SuffixTree::build(black_box(&text))));
        });
    }
    group.finish();
}

/// Benchmark: the full repeated-substring query through each structure
fn bench_refrain(c: &mut Criterion) {
    let mut group = c.benchmark_group("refrain");

    for size in [1_000, 10_000, 100_000].iter() {
        let text = generate_text(*size, 4);
        group.throughput(Throughput::Bytes(*size as u64));

        group.bench_with_input(BenchmarkId::new("via_automaton", size), size, |b, _| {
            b.iter(|| black_box(refrain::via_automaton(black_box(&text))));
        });
        group.bench_with_input(BenchmarkId::new("via_suffix_array", size), size, |b, _| {
            b.iter(|| black_box(refrain::via_suffix_array(black_box(&text))));
        });
        group.bench_with_input(BenchmarkId::new("via_suffix_tree", size), size, |b, _| {
            b.iter(|| black_box(refrain::via_suffix_tree(black_box(&text))));
        });
    }
    group.finish();
}

/// Benchmark: alphabet width effects on the counting sorts and edge lists
fn bench_alphabet_width(c: &mut Criterion) {
    let mut group = c.benchmark_group("alphabet_width");
    let size = 10_000usize;

    for alphabet in [2u8, 10, 26, 200].iter() {
        let text = generate_text(size, *alphabet);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(
            BenchmarkId::new("suffix_array", alphabet),
            alphabet,
            |b, _| {
                b.iter(|| black_box(SuffixArray::build(black_box(&text))));
            },
        );
        group.bench_with_input(
            BenchmarkId::new("automaton", alphabet),
            alphabet,
            |b, _| {
                b.iter(|| black_box(SuffixAutomaton::build(black_box(&text))));
            },
        );
    }
    group.finish();
}

/// Benchmark: substring membership queries on a prebuilt automaton
fn bench_contains(c: &mut Criterion) {
    let text = generate_text(100_000, 4);
    let automaton = SuffixAutomaton::build(&text);
    let mut group = c.benchmark_group("automaton_contains");

    for len in [4usize, 16, 64, 256].iter() {
        let pattern = text.symbols()[1_000..1_000 + len].to_vec();
        group.throughput(Throughput::Bytes(*len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), len, |b, _| {
            b.iter(|| black_box(automaton.contains(black_box(&pattern))));
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_construction,
    bench_refrain,
    bench_alphabet_width,
    bench_contains,
);
criterion_main!(benches);
