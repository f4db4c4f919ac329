//! Benchmarks for caesarclue operations.
//!
//! Measures validation, the ring primitives, delta encoding, rotation and
//! full known-word decryption on a fixed sample message.

use caesarclue::alphabet::subtract;
use caesarclue::delta::delta_sequence;
use caesarclue::shift::shift;
use caesarclue::validate::validate;
use caesarclue::Caesar;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

/// Sample ciphertext used across all benchmarks (shift 4).
const BENCH_CIPHERTEXT: &str = "xlmw mw xli tmgxyvi xlex m xsso mr xli xvmt.";

fn bench_validate(c: &mut Criterion) {
    c.bench_function("validate", |b| {
        b.iter(|| validate(black_box(BENCH_CIPHERTEXT)));
    });
}

fn bench_subtract(c: &mut Criterion) {
    c.bench_function("subtract", |b| {
        b.iter(|| subtract(black_box('x'), black_box('j')));
    });
}

fn bench_delta_sequence(c: &mut Criterion) {
    let mut group = c.benchmark_group("delta_sequence");
    group.throughput(Throughput::Bytes(BENCH_CIPHERTEXT.len() as u64));
    group.bench_function("sample", |b| {
        b.iter(|| delta_sequence(black_box(BENCH_CIPHERTEXT)));
    });
    group.finish();
}

fn bench_shift(c: &mut Criterion) {
    let mut group = c.benchmark_group("shift");
    group.throughput(Throughput::Bytes(BENCH_CIPHERTEXT.len() as u64));
    group.bench_function("sample", |b| {
        b.iter(|| shift(black_box(BENCH_CIPHERTEXT), black_box(-8)));
    });
    group.finish();
}

/// Compares decryption with the default clues against longer custom lists,
/// where the matching clue is tried last.
fn bench_decrypt_clue_scaling(c: &mut Criterion) {
    let lists: &[&[&str]] = &[
        &["this", "the", "that"],
        &["pen", "yours", "answer", "picture", "trip", "this"],
    ];

    let mut group = c.benchmark_group("decrypt_clue_scaling");
    group.throughput(Throughput::Bytes(BENCH_CIPHERTEXT.len() as u64));

    for clues in lists {
        let caesar = Caesar::with_clues(clues.iter()).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(clues.len()), &clues.len(), |b, _| {
            b.iter(|| caesar.decrypt(black_box(BENCH_CIPHERTEXT)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_validate,
    bench_subtract,
    bench_delta_sequence,
    bench_shift,
    bench_decrypt_clue_scaling,
);
criterion_main!(benches);
